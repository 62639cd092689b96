mod builder;
mod headers;

#[cfg(test)]
mod tests;

pub use builder::MessageBuilder;
pub use headers::Headers;

/// Header carrying the base name of the file a message was read from.
///
/// Shared by the transformer (which sets it) and the writer (which reads it).
pub const FILE_NAME_HEADER: &str = "file_name";

/// Immutable message envelope: ordered text headers plus a text payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    headers: Headers,
    payload: String,
}

impl Message {
    /// Start building a message around the given payload
    pub fn with_payload(payload: impl Into<String>) -> MessageBuilder {
        MessageBuilder::new(payload)
    }

    /// All headers, in insertion order
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Look up a header value by name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// The `file_name` header, if present
    pub fn file_name(&self) -> Option<&str> {
        self.header(FILE_NAME_HEADER)
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Consume the message, returning headers and payload
    pub fn into_parts(self) -> (Headers, String) {
        (self.headers, self.payload)
    }
}
