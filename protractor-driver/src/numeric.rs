pub(crate) fn to_string(data: &[u8]) -> String {
    data.iter()
        .map(|e| format!("{:02X}", e))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowest `n` bytes of `value`, least significant first.
pub(crate) fn to_le_bytes(value: i32, n: usize) -> Vec<u8> {
    value.to_le_bytes()[..n].to_vec()
}
