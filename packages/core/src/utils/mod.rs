// Вспомогательные функции

pub mod preview;
