// Draft tracking: positions, pick records, rosters, session state, order.

pub mod order;
pub mod pick;
pub mod roster;
pub mod state;
