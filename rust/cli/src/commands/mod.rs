//! Command handler modules, one per subcommand.

pub mod cfg;
pub mod draw;
pub mod lottery;
pub mod reading;
pub mod spreads;

pub use cfg::handle_cfg_command;
pub use draw::handle_draw_command;
pub use lottery::handle_lottery_command;
pub use reading::handle_reading_command;
pub use spreads::handle_spreads_command;
