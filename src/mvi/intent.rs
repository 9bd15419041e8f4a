//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button clicks, text input)
/// - Async completions (repository results, counters)
/// - Navigation events
///
/// Intents are consumed exactly once by a reducer. They are `Hash + Eq`
/// because a notification may carry a follow-up intent inside an effect set.
pub trait Intent: Debug + Clone + PartialEq + Eq + Hash + Send + 'static {}
