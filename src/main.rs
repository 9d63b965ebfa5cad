//! Radix Converter - CLI Entry Point
//!
//! Commands:
//! - `radix-conv convert <value> --from <base>` - One-shot conversion table
//! - `radix-conv tui` - Interactive converter (also the default)
//! - `radix-conv info` - Symbols and base ordering
//! - `radix-conv test` - Run the built-in self-test

use clap::{Parser, Subcommand};

use radixconv::i18n::{Dictionary, Lang};
use radixconv::radix::{format, parse};
use radixconv::Base;

#[derive(Parser)]
#[command(name = "radix-conv")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "A multi-base number converter built around balanced ternary")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value into every supported base
    Convert {
        /// The digit string to convert
        value: String,
        /// The base the value is written in
        #[arg(short, long, value_enum)]
        from: Base,
    },
    /// Interactive converter
    Tui,
    /// Show digit alphabets and the radix economy ordering
    Info,
    /// Run the built-in self-test
    Test,
}

fn main() {
    let cli = Cli::parse();
    let lang = Lang::detect();

    match cli.command {
        Some(Commands::Convert { value, from }) => {
            convert_value(&value, from, lang);
        }
        Some(Commands::Tui) | None => {
            launch_tui(lang);
        }
        Some(Commands::Info) => {
            print_info(lang);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
    }
}

fn convert_value(value: &str, from: Base, lang: Lang) {
    let dict = Dictionary::get(lang);

    let canonical = match parse(value, from) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    println!("━━━ {} ━━━", dict.header);
    for base in Base::ALL {
        let rendered = match format(&canonical, base) {
            Ok(s) => s,
            Err(_) => dict.error.to_string(),
        };
        let marker = if base == from { "▶" } else { " " };
        println!("{} {:<18} {}", marker, dict.label(base), rendered);
    }
}

fn launch_tui(lang: Lang) {
    #[cfg(feature = "tui")]
    {
        if let Err(e) = radixconv::run_converter(lang) {
            eprintln!("❌ Converter error: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "tui"))]
    {
        println!("radix-conv v0.1.0 (built without the tui feature)");
        println!();
        print_info(lang);
    }
}

fn print_info(lang: Lang) {
    let dict = Dictionary::get(lang);

    println!("━━━ {} ━━━", dict.title);
    println!();
    println!("{}", dict.intro);
    println!();
    for base in Base::ALL {
        println!("  {:<18} {}", dict.label(base), base.symbols());
    }
    println!();
    println!("{}", dict.help);
    println!();
    println!("{}", dict.why_title);
    println!("{}", dict.why_text);
}

fn run_self_test() {
    use num_bigint::BigInt;
    use radixconv::{decode, encode, is_valid, Converter, Trit};

    println!("━━━ Radix Converter Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    // Test 1: Trit negation involution
    print!("Trit negation involution... ");
    let mut ok = true;
    for t in Trit::ALL {
        if t.neg().neg() != t {
            ok = false;
            break;
        }
    }
    if ok {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 2: Balanced ternary roundtrip
    print!("Balanced ternary roundtrip... ");
    ok = true;
    for val in [-9841i64, -100, -1, 0, 1, 42, 100, 9841] {
        if decode(&encode(val)) != Ok(BigInt::from(val)) {
            ok = false;
            break;
        }
    }
    if ok {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 3: Validator strictness
    print!("Validator strictness... ");
    ok = is_valid("", Base::Octal)
        && !is_valid("9", Base::Octal)
        && !is_valid("-5", Base::Binary)
        && is_valid("-5", Base::Decimal)
        && is_valid("+-0", Base::BalancedTernary);
    if ok {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 4: Fan-out of decimal 42
    print!("Conversion pass for decimal 42... ");
    let mut converter = Converter::new("Error");
    converter.on_edit(Base::Decimal, "42");
    ok = converter.field(Base::BalancedTernary).text() == "+---0"
        && converter.field(Base::Binary).text() == "101010"
        && converter.field(Base::Octal).text() == "52"
        && converter.field(Base::Nonary).text() == "46"
        && converter.field(Base::Hexadecimal).text() == "2a";
    if ok {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 5: Generic parser agrees with native
    print!("Generic parser equivalence... ");
    use radixconv::radix::parse_generic;
    ok = true;
    for (text, base) in [
        ("101010", Base::Binary),
        ("777", Base::Octal),
        ("-42", Base::Decimal),
        ("deadbeef", Base::Hexadecimal),
    ] {
        if parse_generic(text, base).ok() != radixconv::parse(text, base).ok() {
            ok = false;
            break;
        }
    }
    if ok {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
