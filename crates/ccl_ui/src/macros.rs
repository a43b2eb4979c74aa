//! Macros for reducing boilerplate in widget implementations.

/// Generates a builder-style setter method for a field.
///
/// ```ignore
/// builder_field!(row_height, f32);
/// // pub fn row_height(mut self, value: f32) -> Self { self.row_height = value; self }
///
/// builder_field!(frame_color, config.frame_color, Color);
/// // pub fn frame_color(mut self, value: Color) -> Self { self.config.frame_color = value; self }
/// ```
#[macro_export]
macro_rules! builder_field {
    ($method:ident, $($field:ident).+, $type:ty) => {
        pub fn $method(mut self, value: $type) -> Self {
            self.$($field).+ = value;
            self
        }
    };
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = value;
            self
        }
    };
}

/// Generates a setter storing a [`Callback`](crate::Callback) that maps a
/// widget value into the host message `M`.
///
/// ```ignore
/// callback_setter!(on_select, usize);
/// // pub fn on_select<F>(mut self, f: F) -> Self where F: Fn(usize) -> M + 'static
///
/// callback_setter!(on_tap);
/// // pub fn on_tap<F>(mut self, f: F) -> Self where F: Fn() -> M + 'static
/// ```
#[macro_export]
macro_rules! callback_setter {
    ($name:ident) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn() -> M + 'static,
        {
            self.$name = $crate::Callback::new(move |()| f());
            self
        }
    };
    ($name:ident, $param:ty) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn($param) -> M + 'static,
        {
            self.$name = $crate::Callback::new(f);
            self
        }
    };
}
