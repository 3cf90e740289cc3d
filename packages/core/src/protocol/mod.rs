// Протокол передачи между отправителем и получателем

pub mod messages;
pub mod wire;

pub use messages::SessionTranscript;
