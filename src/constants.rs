//! Parametros fijos de la cafeteria

/// Archivo donde se agregan las entradas del registro de actividad
pub const LOG_FILE_PATH: &str = "log.txt";

/// Nombre del barista que atiende
pub const BARISTA_NAME: &str = "Иван";

/// Saludo que se muestra antes del menu
pub const GREETING: &str = "Добрый день! Что будете сегодня?";

/// Linea que cierra cada entrada del registro
pub const ENTRY_SEPARATOR: &str = "-------------------------------";

/// Formato de hora larga y fecha larga del encabezado de cada entrada
pub const ENTRY_TIME_FORMAT: &str = "%H:%M:%S %A, %B %-d, %Y";
