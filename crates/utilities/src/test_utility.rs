/// Returns all the words over the given symbols with a length of at most
/// `max_length`, ordered by length and then lexicographically by position in
/// `symbols`.
pub fn words_up_to(symbols: &[char], max_length: usize) -> Vec<String> {
    let mut result = vec![String::new()];
    let mut previous = 0;

    for _ in 0..max_length {
        let current = result.len();
        for index in previous..current {
            for symbol in symbols {
                let mut word = result[index].clone();
                word.push(*symbol);
                result.push(word);
            }
        }

        previous = current;
    }

    result
}
