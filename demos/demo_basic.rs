use declarg::{Keyword, Positional, Scanner, Schema, Unary};
use std::cell::Cell;

fn main() {
    // Slot initials are the program defaults; the scanner only touches them on a match.
    let mut foo: Option<String> = Some("yes".to_string());
    let mut bar: Option<String> = None;
    let mut baz: Option<String> = None;
    let mut key: Option<String> = Some("default key value".to_string());
    let mut source: Option<String> = Some("default source".to_string());
    let mut target: Option<String> = None;
    let help = Cell::new(false);

    let schema = Schema::new()
        .add(
            Unary::new("--foo")
                .flag('f')
                .negation("--no-foo")
                .bind(&mut foo)
                .help(" -f, --foo    Sets foo.\n --no-foo     Unsets foo."),
        )
        .add(
            Unary::new("--bar")
                .flag('b')
                .bind(&mut bar)
                .help(" -b, --bar    Sets bar."),
        )
        .add(
            Unary::new("--baz")
                .negation("--no-baz")
                .bind(&mut baz)
                .help(" --baz        Sets baz.\n --no-baz     Unsets baz."),
        )
        .add(
            Keyword::new("--key")
                .bind(&mut key)
                .help(" --key <val>  Sets key to val."),
        )
        .add(
            Unary::new("--special")
                .on_set(|| println!("special handler called"))
                .help(" --special    Calls a special function."),
        )
        .add(
            Unary::new("--help")
                .flag('h')
                .on_set(|| help.set(true))
                .help(" -h, --help   Prints this message."),
        )
        .add(
            Positional::new()
                .bind(&mut source)
                .help(" source       Positional argument 1."),
        )
        .add(
            Positional::new()
                .bind(&mut target)
                .help(" target       Positional argument 2."),
        );

    let mut scanner = Scanner::new(schema).expect("the declarations must be unambiguous");
    let errors = scanner.scan_env();

    if errors > 0 {
        eprintln!("exiting due to invocation errors");
        std::process::exit(1);
    }

    if help.get() {
        println!("usage: demo_basic [options] [source] [target]");
        scanner.print_help();
        return;
    }

    drop(scanner);
    println!("foo: {}", if foo.is_some() { "YES" } else { "NO" });
    println!("bar: {}", if bar.is_some() { "YES" } else { "NO" });
    println!("baz: {}", if baz.is_some() { "YES" } else { "NO" });
    println!("key: {}", key.as_deref().unwrap_or("NONE"));
    println!("source: {}", source.as_deref().unwrap_or("NONE"));
    println!("target: {}", target.as_deref().unwrap_or("NONE"));
}
