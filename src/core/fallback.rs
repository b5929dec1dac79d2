// src/core/fallback.rs

//! Ordered candidate chains: try alternatives first-to-last, first success
//! wins. Config resolution walks file paths with it; terminal selection
//! walks emulator candidates with it.

/// Runs `attempt` over `candidates` in order and returns the first `Ok`.
///
/// Later candidates are never touched once one succeeds. On exhaustion the
/// error of the last attempt is returned, `None` if the chain was empty.
pub fn first_success<I, T, E, F>(candidates: I, mut attempt: F) -> Result<T, Option<E>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<T, E>,
{
    let mut last_error = None;
    for candidate in candidates {
        match attempt(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error)
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_success_stops_at_first_ok() {
        let mut attempted = Vec::new();
        let result = first_success(["a", "b", "c"], |name| {
            attempted.push(name);
            if name == "b" {
                Ok(name.to_uppercase())
            } else {
                Err(format!("{} unavailable", name))
            }
        });

        assert_eq!(result.unwrap(), "B");
        // "c" must never be attempted once "b" succeeded.
        assert_eq!(attempted, vec!["a", "b"]);
    }

    #[test]
    fn test_exhaustion_keeps_the_last_error() {
        let result: Result<(), Option<String>> =
            first_success(["a", "b"], |name| Err(format!("{} failed", name)));
        assert_eq!(result.unwrap_err(), Some("b failed".to_string()));
    }

    #[test]
    fn test_empty_chain_yields_no_error() {
        let result: Result<(), Option<String>> =
            first_success(Vec::<&str>::new(), |_| Err("unreachable".to_string()));
        assert_eq!(result.unwrap_err(), None);
    }
}
