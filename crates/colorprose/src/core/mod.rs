mod conversion;
mod difference;
mod equality;
mod gamut;
mod math;
mod string;

// conversion
pub(crate) use conversion::{
    from_24bit, oklab_to_oklch, oklab_to_srgb, oklch_to_oklab, oklch_to_srgb, srgb_to_oklab,
    to_24bit,
};

// difference
pub(crate) use difference::{delta_e_ok, distance_squared, find_closest};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;
pub(crate) use equality::{
    is_achromatic_chroma_hue, normalize, normalize_alpha, to_eq_coordinates,
};

// gamut
pub(crate) use gamut::{in_gamut, to_gamut};

// math
pub(crate) use math::{Accumulator, Mean};

// string
pub(crate) use string::{format, parse};
