// Line protocol spoken by the recognition process on stdout
// One record per line: KEY:VALUE, first colon delimits, value may contain colons

use std::sync::atomic::{AtomicBool, Ordering};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::events::{
    CameraFramePayload, PredictionPayload, RecognitionErrorPayload, RecognitionEventEmitter,
    TranslationPayload,
};

/// Key for a Base64-encoded camera frame
pub const KEY_FRAME: &str = "FRAME_B64";
/// Key for the current raw model prediction
pub const KEY_PREDICTION: &str = "PREDICTION";
/// Key for the accumulated translated text
pub const KEY_TRANSLATION: &str = "TRANSLATION";

/// One parsed `KEY:VALUE` record
///
/// Transient: consumed immediately by `dispatch`, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputMessage {
    pub key: String,
    pub value: String,
}

/// Parse one output line into a message
///
/// Splits on the first colon and trims surrounding whitespace from both
/// sides. Lines without a colon are not an error, just `None` - the script
/// may emit partial or unrelated output.
pub fn parse_line(line: &str) -> Option<OutputMessage> {
    let (key, value) = line.split_once(':')?;
    Some(OutputMessage {
        key: key.trim().to_string(),
        value: value.trim().to_string(),
    })
}

/// Errors decoding a `FRAME_B64` payload
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameDecodeError {
    /// The payload is not valid Base64
    #[error("Invalid Base64 payload: {0}")]
    InvalidBase64(String),
    /// The payload decoded to zero bytes
    #[error("Decoded frame is empty")]
    Empty,
    /// The decoded bytes do not start with a known image signature
    #[error("Decoded frame is not a recognized image format")]
    UnknownFormat,
}

/// Validate a frame payload and return the sniffed MIME type
///
/// The webview performs the actual raster decode; here a payload counts as
/// a frame when it is valid Base64 over a recognizable image container.
pub fn decode_frame(value: &str) -> Result<&'static str, FrameDecodeError> {
    let bytes = STANDARD
        .decode(value)
        .map_err(|e| FrameDecodeError::InvalidBase64(e.to_string()))?;
    if bytes.is_empty() {
        return Err(FrameDecodeError::Empty);
    }
    sniff_mime(&bytes).ok_or(FrameDecodeError::UnknownFormat)
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.starts_with(b"BM") {
        Some("image/bmp")
    } else {
        None
    }
}

/// Interpret one message and emit the matching UI update
///
/// Runs on the reader thread; the emitter is the marshaling boundary onto
/// the UI-owning context. Unknown keys are a silent no-op. A frame that
/// fails to decode reports one non-fatal error unless shutdown is in
/// progress, and leaves the previously displayed frame untouched.
pub fn dispatch<E>(msg: &OutputMessage, emitter: &E, shutting_down: &AtomicBool)
where
    E: RecognitionEventEmitter + ?Sized,
{
    match msg.key.as_str() {
        KEY_FRAME => match decode_frame(&msg.value) {
            Ok(mime) => emitter.emit_camera_frame(CameraFramePayload {
                mime: mime.to_string(),
                data: msg.value.clone(),
            }),
            Err(e) => {
                if !shutting_down.load(Ordering::SeqCst) {
                    emitter.emit_recognition_error(RecognitionErrorPayload {
                        title: "Image Display Error".to_string(),
                        message: format!("Could not decode/display frame: {}", e),
                    });
                }
            }
        },
        KEY_PREDICTION => emitter.emit_prediction(PredictionPayload {
            label: msg.value.clone(),
        }),
        KEY_TRANSLATION => emitter.emit_translation(TranslationPayload {
            text: msg.value.clone(),
        }),
        _ => {}
    }
}

#[cfg(test)]
#[path = "protocol_test.rs"]
mod tests;
