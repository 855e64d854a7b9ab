use http::Method;

/// Per-route method permission set.
///
/// Keyed by the first letter of the method name only, so methods sharing an
/// initial letter (POST, PUT, PATCH) are indistinguishable once encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodMask {
    bits: u32,
}

impl MethodMask {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn of(methods: &[Method]) -> Self {
        let mut mask = Self::empty();
        for m in methods {
            mask.insert(m);
        }
        mask
    }

    pub fn insert(&mut self, method: &Method) {
        // a method that can never pass `allows` is not worth a flag
        if let Some(bit) = letter_bit(method.as_str().as_bytes().first()) {
            self.bits |= bit;
        }
    }

    pub fn allows(&self, method: &str) -> bool {
        match letter_bit(method.as_bytes().first()) {
            Some(bit) => self.bits & bit != 0,
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

#[inline]
fn letter_bit(byte: Option<&u8>) -> Option<u32> {
    match byte {
        Some(&b @ b'A'..=b'Z') => Some(1 << (b - b'A')),
        _ => None,
    }
}
