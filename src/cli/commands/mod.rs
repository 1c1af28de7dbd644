pub mod batch;
pub mod history;
pub mod interactive;
pub mod legacy;
pub mod run;
pub mod settings;

pub use batch::{BatchCommands, batch_command};
pub use history::{HistoryCommands, history_command};
pub use interactive::{InteractiveCommands, interactive_command};
pub use legacy::{LegacySumCommands, legacy_sum_command};
pub use run::{RunCommands, run_command};
pub use settings::{SettingsCommands, settings_command};
