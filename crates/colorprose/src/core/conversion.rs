//! Coordinate conversions between sRGB and Oklab.
//!
//! Colors are stored in Oklab and only ever converted to and from sRGB, so
//! the path runs through linear sRGB and XYZ D65 without any other stops.
//! Matrices are those of [color.js](https://github.com/color-js/color.js).

use crate::Float;

type Matrix = [[Float; 3]; 3];

/// Convert 24-bit sRGB to unit-range coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r, g, b].map(|c| c as Float / 255.0)
}

/// Convert sRGB coordinates to 24 bits.
///
/// Out-of-range coordinates are clamped and not-a-numbers become zero. Callers
/// that care about faithful colors gamut map first.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    coordinates.map(|c| {
        let c = if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };
        (c * 255.0).round() as u8
    })
}

#[inline]
fn apply(matrix: &Matrix, vector: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = *vector;
    matrix.map(|row| row[0].mul_add(x, row[1].mul_add(y, row[2] * z)))
}

// --------------------------------------------------------------------------------------------------------------------
// Transfer functions

/// Remove sRGB's gamma. Negative values mirror positive ones.
fn linearize(value: &[Float; 3]) -> [Float; 3] {
    value.map(|c| {
        let magnitude = c.abs();
        if magnitude <= 0.04045 {
            c / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(c)
        }
    })
}

/// Apply sRGB's gamma. Negative values mirror positive ones.
fn gamma_encode(value: &[Float; 3]) -> [Float; 3] {
    value.map(|c| {
        let magnitude = c.abs();
        if magnitude <= 0.00313098 {
            c * 12.92
        } else {
            magnitude.powf(1.0 / 2.4).mul_add(1.055, -0.055).copysign(c)
        }
    })
}

// --------------------------------------------------------------------------------------------------------------------
// Linear sRGB and XYZ

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: Matrix = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: Matrix = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

// --------------------------------------------------------------------------------------------------------------------
// XYZ and Oklab, with cone responses (LMS) in between

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LMS: Matrix = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_OKLAB: Matrix = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_LMS: Matrix = [
    [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
    [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
    [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_XYZ: Matrix = [
    [  1.2268798758459243, -0.5578149944602171,  0.2813910456659647 ],
    [ -0.0405757452148008,  1.1122868032803170, -0.0717110580655164 ],
    [ -0.0763729366746601, -0.4214933324022432,  1.5869240198367816 ],
];

fn xyz_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let lms = apply(&XYZ_TO_LMS, value);
    apply(&LMS_TO_OKLAB, &lms.map(Float::cbrt))
}

fn oklab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let lms = apply(&OKLAB_TO_LMS, value);
    apply(&LMS_TO_XYZ, &lms.map(|c| c.powi(3)))
}

// --------------------------------------------------------------------------------------------------------------------
// The conversions actually used by colors

/// Convert gamma-encoded sRGB to Oklab.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn srgb_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_oklab(&apply(&LINEAR_SRGB_TO_XYZ, &linearize(value)))
}

/// Convert Oklab to gamma-encoded sRGB. The result may be out of gamut.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn oklab_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    gamma_encode(&apply(&XYZ_TO_LINEAR_SRGB, &oklab_to_xyz(value)))
}

/// Below this magnitude for both a and b, hue is powerless.
const POWERLESS: Float = 0.0002;

/// Convert Oklab to its polar form Oklch. A powerless hue is not-a-number.
#[allow(non_snake_case)]
pub(crate) fn oklab_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;

    if a.abs() < POWERLESS && b.abs() < POWERLESS {
        return [L, 0.0, Float::NAN];
    }

    let h = b.atan2(a).to_degrees();
    [L, a.hypot(b), if h < 0.0 { h + 360.0 } else { h }]
}

/// Convert Oklch back to Oklab. A not-a-number hue yields a gray.
#[allow(non_snake_case)]
pub(crate) fn oklch_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;

    if h.is_nan() {
        return [L, 0.0, 0.0];
    }

    let (sin, cos) = h.to_radians().sin_cos();
    [L, C * cos, C * sin]
}

#[inline]
pub(crate) fn oklch_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    oklab_to_srgb(&oklch_to_oklab(value))
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::assert_same_coordinates;
    use crate::Float;

    // (sRGB, linear sRGB, XYZ, Oklab, Oklch with hue divided by 360)
    #[rustfmt::skip]
    const SAMPLES: [[[Float; 3]; 5]; 3] = [
        // #ffca00
        [
            [1.0, 0.792156862745098, 0.0],
            [1.0, 0.5906188409193369, 0.0],
            [0.6235868473237722, 0.635031101987136, 0.08972950140152941],
            [0.8613332073307732, 0.0017175723640959761, 0.17600139371700052],
            [0.8613332073307732, 0.1760097742886813, 89.440876452466 / 360.0],
        ],
        // #3178ea
        [
            [0.19215686274509805, 0.47058823529411764, 0.9176470588235294],
            [0.030713443732993635, 0.18782077230067787, 0.8227857543962835],
            [0.22832473003420622, 0.20025321836938534, 0.80506528557483],
            [0.5909012953108558, -0.03348086515869664, -0.1836287492414715],
            [0.5909012953108558, 0.18665606306724153, 259.66681920272595 / 360.0],
        ],
        // #ffffff
        [
            [1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.9504559270516717, 1.0, 1.0890577507598784],
            [1.0000000000000002, -4.996003610813204e-16, 0.0],
            [1.0000000000000002, 0.0, Float::NAN],
        ],
    ];

    #[test]
    fn test_every_hop() {
        for [srgb, linear, xyz, oklab, oklch] in SAMPLES {
            assert_same_coordinates!(&linearize(&srgb), &linear);
            assert_same_coordinates!(&gamma_encode(&linear), &srgb);
            assert_same_coordinates!(&apply(&LINEAR_SRGB_TO_XYZ, &linear), &xyz);
            assert_same_coordinates!(&apply(&XYZ_TO_LINEAR_SRGB, &xyz), &linear);
            assert_same_coordinates!(&xyz_to_oklab(&xyz), &oklab);
            assert_same_coordinates!(&oklab_to_xyz(&oklab), &xyz);

            let [l, c, h] = oklab_to_oklch(&oklab);
            assert_same_coordinates!(&[l, c, h / 360.0], &oklch);
            assert_same_coordinates!(&oklch_to_oklab(&[l, c, h]), &oklab);

            assert_same_coordinates!(&srgb_to_oklab(&srgb), &oklab);
            assert_same_coordinates!(&oklab_to_srgb(&oklab), &srgb);
        }
    }

    #[test]
    fn test_black() {
        assert_eq!(srgb_to_oklab(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        let [l, c, h] = oklab_to_oklch(&[0.0, 0.0, 0.0]);
        assert_eq!((l, c), (0.0, 0.0));
        assert!(h.is_nan());
    }

    #[test]
    fn test_24bit() {
        assert_eq!(from_24bit(0xff, 0x00, 0x33), [1.0, 0.0, 0.2]);
        assert_eq!(to_24bit(&[1.0, 0.0, 0.2]), [0xff, 0x00, 0x33]);
        assert_eq!(to_24bit(&[1.5, -0.5, Float::NAN]), [0xff, 0x00, 0x00]);
    }
}
