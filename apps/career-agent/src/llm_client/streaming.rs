//! Server-sent-event decoding for streamed chat completions.
//!
//! The provider sends one `data: {json}` line per chunk and terminates with
//! `data: [DONE]`. Network chunks may split a line anywhere, including inside
//! a multi-byte character, so raw bytes are buffered until a newline arrives.

use serde::Deserialize;

use super::LlmError;

#[derive(Debug, Clone, PartialEq)]
pub enum SseEvent {
    Delta(String),
    Done,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
    /// Set when the provider aborts mid-stream, e.g. on a token rate limit.
    error: Option<StreamErrorBody>,
}

#[derive(Debug, Deserialize)]
struct StreamErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
}

#[derive(Debug, Deserialize)]
struct StreamDelta {
    content: Option<String>,
}

/// Incremental line decoder for an SSE byte stream.
///
/// An error decoded after some deltas of the same chunk is held back and
/// returned by the next `push` or `finish`, so those deltas are not lost.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    pending_error: Option<LlmError>,
}

impl SseDecoder {
    /// Feeds raw bytes and returns every event completed by them.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<SseEvent>, LlmError> {
        if let Some(err) = self.pending_error.take() {
            return Err(err);
        }
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(idx) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=idx).collect();
            match decode_line(&String::from_utf8_lossy(&line)) {
                Ok(Some(event)) => events.push(event),
                Ok(None) => {}
                Err(err) if events.is_empty() => return Err(err),
                Err(err) => {
                    self.pending_error = Some(err);
                    break;
                }
            }
        }
        Ok(events)
    }

    /// Decodes whatever is left once the body ends without a trailing newline.
    pub fn finish(&mut self) -> Result<Option<SseEvent>, LlmError> {
        if let Some(err) = self.pending_error.take() {
            return Err(err);
        }
        let rest = std::mem::take(&mut self.buffer);
        decode_line(&String::from_utf8_lossy(&rest))
    }
}

/// Decodes a single SSE line. Comments, blank lines, non-data fields and
/// chunks without text yield `None`. An in-stream `error` payload is an
/// `LlmError::Stream`.
pub fn decode_line(line: &str) -> Result<Option<SseEvent>, LlmError> {
    let Some(data) = line.trim().strip_prefix("data:") else {
        return Ok(None);
    };
    let data = data.trim();

    if data.is_empty() {
        return Ok(None);
    }
    if data == "[DONE]" {
        return Ok(Some(SseEvent::Done));
    }

    let chunk: StreamChunk = serde_json::from_str(data)?;
    if let Some(error) = chunk.error {
        return Err(LlmError::Stream(error.message));
    }

    Ok(chunk
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.delta.content)
        .filter(|c| !c.is_empty())
        .map(SseEvent::Delta))
}
