//! Stateless styling shells. Each applies a fixed class and forwards every
//! other attribute and its children untouched.

mod alert;
mod button;
mod card;
mod label;
mod radio_group;

pub use alert::{Alert, AlertDescription, AlertVariant};
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardContent, CardHeader, CardTitle};
pub use label::Label;
pub use radio_group::{RadioGroup, RadioGroupItem};
