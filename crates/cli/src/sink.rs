// Terminal display sink
// The CLI's rendering of the message surface the web UI draws as an
// alert box. `clear` is a no-op: printed lines cannot be taken back.

use colored::Colorize;
use taskgate_core::domain::message::DisplayMessage;
use taskgate_core::port::message_sink::MessageSink;

pub struct TerminalSink;

impl MessageSink for TerminalSink {
    fn show(&self, message: &DisplayMessage) {
        eprintln!("{} {}", message.title.red().bold(), message.body);
    }

    fn clear(&self) {}
}
