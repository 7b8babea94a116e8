//! Property-based tests for the bit_word public API.

use bit_word::{
    BitRange, Bits, bit_fields, compress, extract, is_power_of_two, least_pot_bound, log2int,
    pdep, reinterpret_bits,
};
use bytemuck_derive::{Pod, Zeroable};
use proptest::prelude::*;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
struct Sample {
    id: u32,
    weight: f32,
}

bit_fields! {
    struct Voxel: Bits<32> {
        (u8, material, 0),
        (bool, solid, 8),
        (u8, light, 9),
        (u8, damage, 17),
    }
}

/// Straightforward PDEP: walk all bit positions, consume value bits in order.
fn reference_pdep(value: u64, mask: u64) -> u64 {
    let mut result = 0;
    let mut k = 0;
    for pos in 0..64 {
        if mask >> pos & 1 == 1 {
            result |= (value >> k & 1) << pos;
            k += 1;
        }
    }
    result
}

/// Strategy for a range inside `[lo, hi)`.
fn range_between(lo: u32, hi: u32) -> impl Strategy<Value = BitRange> {
    (1..=hi - lo).prop_flat_map(move |width| {
        (lo..=hi - width).prop_map(move |start| BitRange::new(start, width))
    })
}

fn range_in(bits: u32) -> impl Strategy<Value = BitRange> {
    range_between(0, bits)
}

/// Two non-overlapping ranges of a 64-bit word, in either order.
fn disjoint_ranges() -> impl Strategy<Value = (BitRange, BitRange)> {
    (1u32..64, any::<bool>()).prop_flat_map(|(split, swap)| {
        (range_between(0, split), range_between(split, 64))
            .prop_map(move |(a, b)| if swap { (b, a) } else { (a, b) })
    })
}

fn low_mask(width: u32) -> u64 {
    if width == 64 { u64::MAX } else { (1 << width) - 1 }
}

// -------------------------------------------------------------
// Power of two
// -------------------------------------------------------------

proptest! {
    #[test]
    fn prop_power_of_two_iff_single_bit(x in any::<u64>()) {
        prop_assert_eq!(is_power_of_two(x), x.count_ones() == 1);
        prop_assert_eq!(is_power_of_two(x as u32), (x as u32).count_ones() == 1);
        prop_assert_eq!(is_power_of_two(x as i64), x.count_ones() == 1);
        prop_assert_eq!(is_power_of_two(x as i32), (x as u32).count_ones() == 1);
    }
}

// -------------------------------------------------------------
// Bits<N> range access
// -------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_get_truncates_64(range in range_in(64), value in any::<u64>()) {
        let mut b = Bits::<64>::new();
        b.set_range(range, value);
        prop_assert_eq!(b.get_range(range), value & low_mask(range.width));
        // nothing outside the range was touched
        prop_assert_eq!(b.word() & !range.mask(), 0);
    }

    #[test]
    fn prop_set_get_truncates_32(range in range_in(32), value in any::<u32>()) {
        let mut b = Bits::<32>::new();
        b.set_range(range, value);
        prop_assert_eq!(u64::from(b.get_range(range)), u64::from(value) & low_mask(range.width));
        prop_assert_eq!(u64::from(b.word()) & !range.mask(), 0);
    }

    #[test]
    fn prop_disjoint_ranges_are_independent(
        (a, b) in disjoint_ranges(),
        initial in any::<u64>(),
        value in any::<u64>(),
    ) {
        prop_assert!(!a.overlaps(b));
        let mut word = Bits::<64>::from_word(initial);
        let before = word.get_range(b);
        word.set_range(a, value);
        prop_assert_eq!(word.get_range(b), before);
    }

    #[test]
    fn prop_mask_has_width_ones_inside_range(range in range_in(64)) {
        let mask = range.mask();
        prop_assert_eq!(mask.count_ones(), range.width);
        prop_assert_eq!(mask.trailing_zeros(), range.start);
        prop_assert_eq!(64 - mask.leading_zeros(), range.end());
    }

    #[test]
    fn prop_const_and_runtime_ranges_agree(word in any::<u64>(), value in any::<u64>()) {
        let mut a = Bits::<64>::from_word(word);
        let mut b = a;
        a.set::<13, 21>(value);
        b.set_range(BitRange::new(13, 21), value);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.get::<13, 21>(), b.get_range(BitRange::new(13, 21)));
    }
}

// -------------------------------------------------------------
// Named fields
// -------------------------------------------------------------

proptest! {
    #[test]
    fn prop_record_fields_roundtrip(
        material in any::<u8>(),
        solid in any::<bool>(),
        light in any::<u8>(),
        damage in any::<u8>(),
    ) {
        let mut v = Voxel::new();
        v.set_damage(damage);
        v.set_light(light);
        v.set_solid(solid);
        v.set_material(material);

        prop_assert_eq!(v.material(), material);
        prop_assert_eq!(v.solid(), solid);
        prop_assert_eq!(v.light(), light);
        prop_assert_eq!(v.damage(), damage);
        prop_assert_eq!(v.bits().word() >> 25, 0);
    }
}

// -------------------------------------------------------------
// PDEP
// -------------------------------------------------------------

proptest! {
    #[test]
    fn prop_pdep_matches_reference(value in any::<u64>(), mask in any::<u64>()) {
        prop_assert_eq!(pdep(value, mask), reference_pdep(value, mask));
        prop_assert_eq!(
            u64::from(pdep(value as u32, mask as u32)),
            reference_pdep(value & 0xFFFF_FFFF, mask & 0xFFFF_FFFF)
        );
    }

    #[test]
    fn prop_pdep_stays_inside_mask(value in any::<u64>(), mask in any::<u64>()) {
        let out = pdep(value, mask);
        prop_assert_eq!(out & !mask, 0);
        prop_assert_eq!(out.count_ones(), (value & low_mask(mask.count_ones())).count_ones());
    }

    #[test]
    fn prop_pdep_signed_equals_unsigned(value in any::<i32>(), mask in any::<i32>()) {
        prop_assert_eq!(pdep(value, mask), pdep(value as u32, mask as u32));
    }
}

// -------------------------------------------------------------
// log2 / power-of-two bound
// -------------------------------------------------------------

proptest! {
    #[test]
    fn prop_log2int_brackets_value(value in 1u64..) {
        let l = log2int(value);
        prop_assert!(1u64 << l <= value);
        prop_assert!(l == 63 || value < 1u64 << (l + 1));
    }

    #[test]
    fn prop_least_pot_bound_is_tight(v in 0usize..(1 << 40)) {
        let bound = least_pot_bound(v);
        prop_assert!(bound.is_power_of_two());
        prop_assert!(bound >= v);
        if v > 1 {
            prop_assert!(bound / 2 < v);
        }
    }
}

// -------------------------------------------------------------
// Reinterpretation
// -------------------------------------------------------------

proptest! {
    #[test]
    fn prop_u32_float_roundtrip(x in any::<u32>()) {
        let f: f32 = reinterpret_bits(x);
        prop_assert_eq!(reinterpret_bits::<u32, _>(f), x);
    }

    #[test]
    fn prop_compress_extract_bit_exact(h in any::<u32>(), l in any::<u32>()) {
        let (eh, el) = extract(compress(f32::from_bits(h), f32::from_bits(l)));
        prop_assert_eq!(eh.to_bits(), h);
        prop_assert_eq!(el.to_bits(), l);
    }

    #[test]
    fn prop_pod_struct_roundtrip(id in any::<u32>(), weight in any::<u32>()) {
        let sample = Sample { id, weight: f32::from_bits(weight) };
        let word: u64 = reinterpret_bits(sample);
        let back: Sample = reinterpret_bits(word);
        prop_assert_eq!(back.id, id);
        prop_assert_eq!(back.weight.to_bits(), weight);
    }

    #[test]
    fn prop_bits_reinterpret_as_word(word in any::<u64>()) {
        let b: Bits<64> = reinterpret_bits(word);
        prop_assert_eq!(b.word(), word);
        let halves: [Bits<32>; 2] = reinterpret_bits(b);
        prop_assert_eq!(reinterpret_bits::<u64, _>(halves), word);
    }
}
