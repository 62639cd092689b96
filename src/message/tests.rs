#[cfg(test)]
mod tests {
    use crate::message::{Headers, Message, FILE_NAME_HEADER};

    #[test]
    fn test_build_message_with_payload_only() {
        let message = Message::with_payload("hello").build();
        assert_eq!(message.payload(), "hello");
        assert!(message.headers().is_empty());
        assert!(message.file_name().is_none());
    }

    #[test]
    fn test_file_name_accessor() {
        let message = Message::with_payload("body")
            .header(FILE_NAME_HEADER, "report.txt")
            .build();
        assert_eq!(message.file_name(), Some("report.txt"));
        assert_eq!(message.header("file_name"), Some("report.txt"));
    }

    #[test]
    fn test_missing_header_is_none() {
        let message = Message::with_payload("body").header("other", "x").build();
        assert_eq!(message.header("missing"), None);
        assert_eq!(message.file_name(), None);
    }

    #[test]
    fn test_headers_keep_insertion_order() {
        let message = Message::with_payload("")
            .header("b", "2")
            .header("a", "1")
            .header("c", "3")
            .build();

        let names: Vec<&str> = message.headers().iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_header_overwrite_keeps_position() {
        let mut headers = Headers::new();
        headers.insert("first", "1");
        headers.insert("second", "2");
        headers.insert("first", "one");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("first"), Some("one"));
        let pairs: Vec<(&str, &str)> = headers.iter().collect();
        assert_eq!(pairs, vec![("first", "one"), ("second", "2")]);
    }

    #[test]
    fn test_into_parts() {
        let message = Message::with_payload("content")
            .header(FILE_NAME_HEADER, "a.txt")
            .build();
        let (headers, payload) = message.into_parts();
        assert_eq!(payload, "content");
        assert!(headers.contains(FILE_NAME_HEADER));
    }
}
