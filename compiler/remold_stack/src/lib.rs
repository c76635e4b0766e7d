//! Stack growth for deep tree recursion.
//!
//! Parsing, visiting and printing all recurse once per nesting level of the
//! source. Generated or minified code (long `a + b + c + ...` chains, deeply
//! nested lambdas) can exceed the default thread stack, so every recursive
//! entry point runs its body through [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown with `stacker` when less than
//! [`RED_ZONE`] remains; on `wasm32` the closure is called directly.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Nested {
        Leaf,
        Node(Box<Nested>),
    }

    fn depth(nested: &Nested) -> usize {
        ensure_sufficient_stack(|| match nested {
            Nested::Leaf => 0,
            Nested::Node(inner) => depth(inner) + 1,
        })
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let mut nested = Nested::Leaf;
        for _ in 0..200_000 {
            nested = Nested::Node(Box::new(nested));
        }
        assert_eq!(depth(&nested), 200_000);

        // Drop iteratively; the derived drop would recurse.
        let mut current = nested;
        while let Nested::Node(inner) = current {
            current = *inner;
        }
    }

    #[test]
    fn passes_results_through() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("boom"));
        assert_eq!(result, Err("boom"));
    }
}
