// Hex-превью публичного материала для логов и отчётов
// Никогда не вызывать для секретных ключей и общих секретов

/// Первые `max_bytes` байт в hex, с "..." если данные длиннее
pub fn hex_preview(data: &[u8], max_bytes: usize) -> String {
    if data.len() <= max_bytes {
        return hex::encode(data);
    }
    format!("{}...", hex::encode(&data[..max_bytes]))
}
