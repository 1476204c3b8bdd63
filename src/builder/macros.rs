//! Macros for ergonomic machine configuration.

/// Build a [`StateLabels`](crate::core::StateLabels) or
/// [`EventLabels`](crate::core::EventLabels) map from `name => label` pairs.
///
/// The map type is inferred from where the result is used.
///
/// # Example
///
/// ```
/// use transitions::core::{EventLabels, StateLabels};
/// use transitions::labels;
///
/// let states: StateLabels = labels! {
///     "Initial" => "start",
///     "WaitPay" => "awaiting payment",
/// };
/// let events: EventLabels = labels! { "Create" => "create order" };
///
/// assert_eq!(states.len(), 2);
/// assert!(events.contains_key("Create"));
/// ```
#[macro_export]
macro_rules! labels {
    ($($name:expr => $label:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = ::std::collections::HashMap::new();
        $(
            map.insert(::std::convert::From::from($name), ::std::string::String::from($label));
        )*
        map
    }};
}
