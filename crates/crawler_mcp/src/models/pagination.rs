pub const NO_MORE_CONTENT: &str = "<error>No more content available.</error>";

/// Cut a window of `max_length` characters out of `content`, starting at the
/// character index `start_index`.
///
/// Indices count chars, not bytes, so a window never splits a code point.
/// A truncated window ends with a hint naming the `start_index` of the next one.
pub fn paginate(content: &str, start_index: usize, max_length: usize) -> String {
    let mut window = content.char_indices().skip(start_index);
    let Some((start_byte, _)) = window.next() else {
        return NO_MORE_CONTENT.to_string();
    };

    let end_byte = content[start_byte..]
        .char_indices()
        .nth(max_length)
        .map(|(offset, _)| start_byte + offset);

    match end_byte {
        Some(end_byte) => {
            let next_start = start_index + max_length;
            format!(
                "{}\n\n<error>Content truncated. Call the web-crawler tool with a start_index of {} to get more content.</error>",
                &content[start_byte..end_byte],
                next_start
            )
        }
        None => content[start_byte..].to_string(),
    }
}
