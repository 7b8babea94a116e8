use bit_word::{
    BitRange, Bits, BitsError, bit_fields, compress, extract, least_pot_bound, log2int, pdep,
    pot_mask, try_log2int,
};

bit_fields! {
    /// A draw call key sorted by its raw 64-bit value.
    pub struct DrawKey: Bits<64> {
        (u16, material, 0),
        (u16, mesh, 16),
        (f32, depth, 32),
    }
}

fn main() -> Result<(), BitsError> {
    println!("=== Bit Word Examples ===\n");

    // Example 1: Explicit ranges
    example_ranges();

    // Example 2: Named fields
    example_named_fields()?;

    // Example 3: Scatter and masks
    example_scatter();

    // Example 4: Float packing
    example_float_packing();

    Ok(())
}

fn example_ranges() {
    println!("Example 1: Instruction word with explicit ranges");

    let mut insn = Bits::<32>::new();
    insn.set::<0, 6>(0b100011); // opcode
    insn.set::<6, 5>(17); // register
    insn.set::<11, 16>(0xFFFF_FFFF); // immediate, truncated to 16 bits

    println!("  Word:      {:?}", insn);
    println!("  Opcode:    {:#08b}", insn.get::<0, 6>());
    println!("  Register:  {}", insn.get::<6, 5>());
    println!("  Immediate: {:#x}", insn.get::<11, 16>());
    println!();
}

fn example_named_fields() -> Result<(), BitsError> {
    println!("Example 2: Draw key with named fields");

    DrawKey::check_layout()?;

    let mut key = DrawKey::new();
    key.set_material(42);
    key.set_mesh(7);
    key.set_depth(0.75);

    println!("  {:?}", key);
    for field in DrawKey::FIELDS {
        println!(
            "    {:<8} bits {:>2}..{:<2} value {:#x}",
            field.name,
            field.range.start,
            field.range.end(),
            key.bits().get_range(field.range)
        );
    }

    let range = BitRange::new(60, 8).within(64);
    println!("  Range 60+8 in a 64-bit word: {:?}", range);
    println!();

    Ok(())
}

fn example_scatter() {
    println!("Example 3: Scatter and masks");

    let spread = pdep(0b1111u32, 0b0101_0101);
    println!("  pdep(0b1111, 0b01010101) = {:#010b}", spread);
    println!("  pot_mask(12)              = {:#x}", pot_mask(12));
    println!("  log2int(4096)             = {}", log2int(4096));
    println!("  try_log2int(0)            = {:?}", try_log2int(0));
    println!("  least_pot_bound(600)      = {}", least_pot_bound(600));
    println!();
}

fn example_float_packing() {
    println!("Example 4: Two f32 values in one f64 carrier");

    let carrier = compress(3.5, -0.0);
    let (h, l) = extract(carrier);

    println!("  Carrier bits: {:#018x}", carrier.to_bits());
    println!("  High: {}  Low: {} (sign bit {})", h, l, l.is_sign_negative());
    println!();
}
