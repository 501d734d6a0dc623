use crate::{KvsEngine, Request, Response, Result};
use log::{debug, info, warn};
use std::io::{BufRead, Write};

/// Command dispatcher. Owns one engine and runs requests against it.
pub struct Session<E: KvsEngine> {
    engine: E,
}

impl<E: KvsEngine> Session<E> {
    pub fn new(engine: E) -> Session<E> {
        Session { engine }
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Runs one request. Engine errors are returned as-is, never folded into
    /// a `Response::Error`.
    pub fn execute(&mut self, request: Request) -> Result<Response> {
        debug!("Request for key {}", request.key());
        let response = match request {
            Request::Get { key } => match self.engine.get(&key) {
                Some(value) => Response::Found { value },
                None => {
                    debug!("No such key in storage: {key}");
                    Response::NotFound
                }
            },
            Request::Set { key, value } => {
                self.engine.set(key, value)?;
                Response::Ok
            }
            Request::Rm { key } => {
                self.engine.remove(&key)?;
                Response::Ok
            }
        };
        Ok(response)
    }

    /// Batch mode: one JSON request per input line, one JSON response per
    /// output line. Blank lines are skipped; a line that does not parse gets
    /// an error response and the run continues.
    ///
    /// Returns the number of requests executed.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> Result<usize> {
        let mut executed = 0;
        let mut lineno = 0;
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            lineno += 1;
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            let response = match serde_json::from_slice::<Request>(&line) {
                Ok(request) => {
                    executed += 1;
                    self.execute(request)?
                }
                Err(e) => {
                    warn!("Malformed request on line {lineno}: {e}");
                    Response::Error {
                        message: e.to_string(),
                    }
                }
            };
            serde_json::to_writer(&mut writer, &response)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        info!("Batch finished, {executed} requests executed");
        Ok(executed)
    }
}
