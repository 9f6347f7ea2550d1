pub mod profile;

// The profile is a single screen:
// - Top bar with the edit affordance / Save button
// - Company name header
// - Static "Today's reminders" block
// - About, Services, Hours and Location sections
// - Footer with key hints or a status message
//
// A help overlay (press '?') is drawn on top when requested.

pub use profile::{service_items, HitTarget, ProfileScreen};
