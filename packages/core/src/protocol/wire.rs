// Wire format (MessagePack сериализация)
// Используется для передачи транскрипта сессии от отправителя к получателю

use crate::error::{CryptoError, Result};
use crate::protocol::messages::SessionTranscript;
use rmp_serde::{Deserializer, Serializer};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Упаковать транскрипт в MessagePack
pub fn pack_transcript(transcript: &SessionTranscript) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    transcript
        .serialize(&mut Serializer::new(&mut buffer))
        .map_err(|e| CryptoError::SerializationError(format!("MessagePack pack error: {}", e)))?;

    debug!(
        target: "protocol::wire",
        session_id = %transcript.session_id,
        bytes = buffer.len(),
        "Packed session transcript"
    );
    Ok(buffer)
}

/// Распаковать MessagePack в транскрипт
///
/// Конверт короче 28 байт отклоняется уже здесь (`DeserializationError`).
pub fn unpack_transcript(data: &[u8]) -> Result<SessionTranscript> {
    let mut deserializer = Deserializer::new(data);
    SessionTranscript::deserialize(&mut deserializer).map_err(|e| {
        CryptoError::DeserializationError(format!("MessagePack unpack error: {}", e))
    })
}
