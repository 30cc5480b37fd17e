// For testing purposes: Easily creates a set of squares from their names.
// Panics on invalid names.
#[cfg(test)]
#[macro_export]
macro_rules! squares {
    ( $( $x:expr ),* ) => {
        {
            #[allow(unused_mut)]
            let mut base = std::collections::BTreeSet::<$crate::positions::Square>::new();
            $(
                base.insert($x.parse::<$crate::positions::Square>().unwrap());
            )*
            base
        }
    };
}

/// Shorthand for a parsed square in tests.
#[cfg(test)]
pub fn sq(s: &str) -> crate::positions::Square {
    s.parse().unwrap()
}
