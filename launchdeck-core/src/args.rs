/// Splits a space-delimited argument field into tokens, dropping empty ones.
/// Quoting is not supported, so a token cannot contain a literal space.
pub fn split_args(input: &str) -> Vec<String> {
    input
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_args(args: &[String]) -> String {
    args.join(" ")
}
