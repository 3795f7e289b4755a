//! Registro de actividad de la cafeteria.
//!
//! `Logger` solo sabe dar formato a una entrada; el destino (`LogSink`) se recibe en cada llamada.
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::{Local, NaiveDateTime};
use lazy_static::lazy_static;
use log::debug;

use crate::{
    constants::{ENTRY_SEPARATOR, ENTRY_TIME_FORMAT},
    errors::ShopError,
};

lazy_static! {
    static ref INSTANCE: Logger = Logger::new();
}

/// Destino donde se agregan las entradas. Cada llamada a `append` corresponde a una entrada completa.
pub trait LogSink {
    fn append(&self, write: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>) -> io::Result<()>;
}

pub struct Logger {
    clock: fn() -> NaiveDateTime,
}

impl Logger {
    pub fn new() -> Logger {
        Logger {
            clock: local_now,
        }
    }

    /// Logger con un reloj fijo, para que las entradas sean reproducibles.
    pub fn with_clock(clock: fn() -> NaiveDateTime) -> Logger {
        Logger { clock }
    }

    /// Devuelve el logger compartido por todo el proceso. Se crea en el primer llamado.
    pub fn instance() -> &'static Logger {
        &INSTANCE
    }

    pub fn write_entry(&self, message: &str, w: &mut dyn Write) -> io::Result<()> {
        let now = (self.clock)();
        write!(w, "\r\nLog Entry : ")?;
        writeln!(w, "{}", now.format(ENTRY_TIME_FORMAT))?;
        writeln!(w, "  :")?;
        writeln!(w, "  :{}", message)?;
        writeln!(w, "{}", ENTRY_SEPARATOR)?;
        Ok(())
    }

    pub fn log(&self, message: &str, sink: &dyn LogSink) -> Result<(), ShopError> {
        sink.append(&mut |w: &mut dyn Write| self.write_entry(message, w))
            .map_err(|err| {
                debug!("[LOGGER] Could not append entry {:?}: {}", message, err);
                ShopError::SinkError(err)
            })
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Archivo de texto que se abre, se escribe y se cierra en cada entrada.
pub struct FileSink {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> FileSink {
        FileSink {
            path: path.as_ref().to_path_buf(),
            append_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn append(&self, write: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>) -> io::Result<()> {
        // Dos entradas nunca se intercalan en el archivo
        let _guard = self
            .append_lock
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        write(&mut file)?;
        file.flush()?;
        debug!("[LOGGER] Appended entry to {:?}", self.path);
        Ok(())
    }
}

/// Guarda las entradas en memoria.
#[derive(Default)]
pub struct MemorySink {
    buffer: Mutex<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink::default()
    }

    pub fn contents(&self) -> String {
        match self.buffer.lock() {
            Ok(buffer) => String::from_utf8_lossy(&buffer).into_owned(),
            Err(_) => String::new(),
        }
    }

    /// Mensajes registrados, en orden.
    pub fn messages(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter_map(|line| line.strip_prefix("  :"))
            .filter(|message| !message.is_empty())
            .map(String::from)
            .collect()
    }
}

impl LogSink for MemorySink {
    fn append(&self, write: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>) -> io::Result<()> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "memory sink lock poisoned"))?;
        write(&mut *buffer)
    }
}

/// Sink que acepta `remaining` entradas y despues falla.
#[cfg(test)]
pub struct FailingSink {
    inner: MemorySink,
    remaining: Mutex<usize>,
}

#[cfg(test)]
impl FailingSink {
    pub fn failing_after(remaining: usize) -> FailingSink {
        FailingSink {
            inner: MemorySink::new(),
            remaining: Mutex::new(remaining),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.inner.messages()
    }
}

#[cfg(test)]
impl LogSink for FailingSink {
    fn append(&self, write: &mut dyn FnMut(&mut dyn Write) -> io::Result<()>) -> io::Result<()> {
        let mut remaining = self.remaining.lock().unwrap();
        if *remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "disk says no"));
        }
        *remaining -= 1;
        self.inner.append(write)
    }
}

#[cfg(test)]
pub fn fixed_clock() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(9, 5, 3)
        .unwrap()
}
