use num_traits::{One, PrimInt};

/// Trait implemented by flag enums declared with [`define_bitmask_flags!`].
///
/// The enum's discriminant (via `#[repr(u8)]`) determines the bit index.
/// The backing integer type is chosen via the associated `Storage`.
pub trait FlagBitmask {
    type Storage: PrimInt;

    fn bit_index(&self) -> u8;

    fn mask(&self) -> Self::Storage {
        // NOTE: `bit_index()` must be < number of bits in `Storage`.
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// A plain bitmask container, cheap to copy and to persist as its raw `bits`.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitmaskFlags<T: PrimInt> {
    pub bits: T,
}

impl<T: PrimInt> BitmaskFlags<T> {
    pub fn new(bits: T) -> Self {
        Self { bits }
    }

    /// Build from a list of set flags.
    pub fn from_flags<U: FlagBitmask<Storage = T> + Copy>(flags: &[U]) -> Self {
        let mut out = Self::new(T::zero());
        for &flag in flags {
            out.add(flag);
        }
        out
    }

    pub fn add<U: FlagBitmask<Storage = T>>(&mut self, flag: U) {
        self.bits = self.bits | flag.mask();
    }

    pub fn remove<U: FlagBitmask<Storage = T>>(&mut self, flag: U) {
        self.bits = self.bits & !flag.mask();
    }

    pub fn has<U: FlagBitmask<Storage = T>>(&self, flag: U) -> bool {
        (self.bits & flag.mask()) != T::zero()
    }

    /// Set or clear `flag` depending on `on`.
    pub fn set<U: FlagBitmask<Storage = T>>(&mut self, flag: U, on: bool) {
        if on {
            self.add(flag);
        } else {
            self.remove(flag);
        }
    }

    /// Clear `flag` and report whether it was set.
    pub fn take<U: FlagBitmask<Storage = T> + Copy>(&mut self, flag: U) -> bool {
        let was = self.has(flag);
        self.remove(flag);
        was
    }
}

/// Declare a bitmask-backed enum and implement `FlagBitmask` for it.
///
/// Example:
/// ```rust
/// drag::define_bitmask_flags!(Surface, u8, {
///     Slippery,
///     Sticky,
/// });
/// ```
#[macro_export]
macro_rules! define_bitmask_flags {
    ($name:ident, $storage:ty, { $($(#[$meta:meta])* $variant:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$meta])* $variant),*
        }

        impl $crate::bitmask_flags::FlagBitmask for $name {
            type Storage = $storage;

            fn bit_index(&self) -> u8 {
                *self as u8
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::define_bitmask_flags!(TestFlag, u8, { A, B, C });

    #[test]
    fn add_remove_has() {
        let mut flags = BitmaskFlags::<u8>::default();
        flags.add(TestFlag::B);
        assert!(flags.has(TestFlag::B));
        assert!(!flags.has(TestFlag::A));
        assert_eq!(flags.bits, 0b010);

        flags.remove(TestFlag::B);
        assert_eq!(flags.bits, 0);
    }

    #[test]
    fn set_and_take() {
        let mut flags = BitmaskFlags::from_flags(&[TestFlag::A, TestFlag::C]);
        assert_eq!(flags.bits, 0b101);

        flags.set(TestFlag::A, false);
        flags.set(TestFlag::B, true);
        assert_eq!(flags.bits, 0b110);

        assert!(flags.take(TestFlag::C));
        assert!(!flags.take(TestFlag::C));
        assert_eq!(flags.bits, 0b010);
    }
}
