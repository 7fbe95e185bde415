/// a maximal slice of the input whose characters all agree on the class predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub text: &'a str,
    pub in_class: bool,
}

/// splits text into alternating runs of in-class and out-of-class characters;
/// the runs concatenate back to the input exactly
pub struct Runs<'a, P> {
    rest: &'a str,
    predicate: P,
}

impl<'a, P> Runs<'a, P>
where
    P: Fn(char) -> bool,
{
    pub fn new(text: &'a str, predicate: P) -> Runs<'a, P> {
        Runs { rest: text, predicate }
    }
}

impl<'a, P> Iterator for Runs<'a, P>
where
    P: Fn(char) -> bool,
{
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        let first = rest.chars().next()?;
        let in_class = (self.predicate)(first);
        let end = rest
            .char_indices()
            .find(|&(_, c)| (self.predicate)(c) != in_class)
            .map_or(rest.len(), |(pos, _)| pos);
        let (text, tail) = rest.split_at(end);
        self.rest = tail;
        Some(Run { text, in_class })
    }
}

#[cfg(test)]
mod test {
    use crate::core::run::{Run, Runs};
    use crate::util::char_class::{is_code_char, is_word_char};

    fn collect(text: &str, predicate: fn(char) -> bool) -> Vec<(&str, bool)> {
        Runs::new(text, predicate).map(|r| (r.text, r.in_class)).collect()
    }

    #[test]
    pub fn test_word_runs() {
        assert_eq!(
            vec![("the", true), (", ", false), ("cat", true), ("!", false)],
            collect("the, cat!", is_word_char)
        );
        assert_eq!(vec![("  ", false), ("a", true)], collect("  a", is_word_char));
        assert_eq!(vec![("x1y", true)], collect("x1y", is_code_char));
        assert_eq!(vec![("x", true), ("1", false), ("y", true)], collect("x1y", is_word_char));
    }

    #[test]
    pub fn test_runs_cover_input() {
        let text = "Alice—was _l very, VERY tired: 42 café";
        let rebuilt: String = Runs::new(text, is_word_char).map(|r| r.text).collect();
        assert_eq!(text, rebuilt);
        let runs: Vec<Run> = Runs::new(text, is_code_char).collect();
        for pair in runs.windows(2) {
            assert_ne!(pair[0].in_class, pair[1].in_class);
        }
    }

    #[test]
    pub fn test_empty_input() {
        assert_eq!(0, Runs::new("", is_word_char).count());
    }
}
