use afl::fuzz;
use nz_bank_account::{
    get_parts_object, validate_with_register, AccountParts, BankRegister, ValidationResult,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const REGISTER: &str = r#"{
    "01": {"Bank_Name": "ANZ Bank New Zealand", "Branches": {"0902": {"Branch_Information": "ANZ Retail 902"}}},
    "31": {"Bank_Name": "Citibank N.A.", "Branches": {"2800": {"Branch_Information": "Citibank Auckland"}}}
}"#;

#[cfg(not(feature = "manual_test"))]
fn main() {
    let register = BankRegister::from_json_str(REGISTER).unwrap();
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data, &register);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let register = BankRegister::from_json_str(REGISTER).unwrap();
    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input, &register);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8], register: &BankRegister) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, register, rng);

    Some(())
}

/// Cut the input at random char boundaries to build a structured input.
fn gen_parts(input: &str, rng: &mut StdRng) -> AccountParts {
    let mut cuts: Vec<usize> = (0..3)
        .map(|_| rng.gen_range(0..=input.len()))
        .map(|mut cut| {
            while !input.is_char_boundary(cut) {
                cut -= 1;
            }
            cut
        })
        .collect();
    cuts.sort_unstable();
    AccountParts::new(
        &input[..cuts[0]],
        &input[cuts[0]..cuts[1]],
        &input[cuts[1]..cuts[2]],
        &input[cuts[2]..],
    )
}

fn run_fuzz(input: &str, register: &BankRegister, mut rng: StdRng) {
    let parts = if rng.gen_bool(0.5) {
        get_parts_object(input)
    } else {
        get_parts_object(gen_parts(input, &mut rng))
    };

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Parts: {:?}", parts);
    }

    let result = validate_with_register(&parts, Some(register));

    #[cfg(feature = "manual_test")]
    {
        println!("Result: {:?}", result);
    }

    if !result.parts_object_valid {
        assert_eq!(result, ValidationResult::default());
        return;
    }

    // A well formed account survives a trip through its dashed form
    let joined = parts.join("-");
    assert_eq!(get_parts_object(joined.as_str()), parts);
    assert_eq!(validate_with_register(joined.as_str(), Some(register)), result);

    // Without a register only the descriptive lookups change
    let bare = validate_with_register(&parts, None);
    assert!(!bare.id && !bare.branch);
    assert_eq!(bare.base, result.base);
    assert_eq!(bare.suffix, result.suffix);
}
