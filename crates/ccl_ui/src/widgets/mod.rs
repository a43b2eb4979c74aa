// Widget implementations

mod button;
mod checkbox;
mod combobox;
mod grid;
mod icon_label_button;
mod image;
mod label;
mod listbox;
mod progress_bar;
mod radio_group;
mod treeview;

pub use button::{button, BackgroundImages, Button};
pub use checkbox::{Checkbox, CheckboxImages};
pub use combobox::{ComboRegion, Combobox, ComboboxConfig, DropdownStyle};
pub use grid::{Grid, GridConfig};
pub use icon_label_button::IconLabelButton;
pub use image::Image;
pub use label::{label, Label};
pub use listbox::{listbox, Listbox, ListboxConfig};
pub use progress_bar::{fill_length, FillImage, ProgressBar, ProgressBarConfig, ProgressSnapshot};
pub use radio_group::{Arrangement, RadioGroup, RadioGroupConfig};
pub use treeview::{ButtonStyle, NodePath, TreeNode, TreeRegion, TreeRow, Treeview, TreeviewConfig};
