use declarg::{
    Discard, Keyword, Positional, ScanError, Scanner, Schema, Unary, UserInterface,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// A caller-supplied interface, as a consumer of the crate would write one.
#[derive(Default)]
struct Recorder {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl UserInterface for Recorder {
    fn print(&self, message: String) {
        self.messages.borrow_mut().push(message);
    }

    fn print_error(&self, error: ScanError) {
        self.errors.borrow_mut().push(error.to_string());
    }
}

#[test]
fn builder_compiles() {
    Scanner::new(Schema::new()).unwrap();
}

#[test]
fn scenario_end_to_end() {
    let mut foo: Option<String> = None;
    let mut key: Option<String> = Some("default".to_string());
    let mut first: Option<String> = None;
    let mut second: Option<String> = None;

    let schema = Schema::new()
        .add(
            Unary::new("--foo")
                .flag('f')
                .negation("--no-foo")
                .bind(&mut foo),
        )
        .add(Keyword::new("--key").bind(&mut key))
        .add(Positional::new().bind(&mut first))
        .add(Positional::new().bind(&mut second));

    let mut scanner = Scanner::new(schema).unwrap();
    let errors = scanner.scan(&["program", "-f", "--key", "v", "a", "b"]);

    drop(scanner);
    assert_eq!(errors, 0);
    assert_eq!(foo.as_deref(), Some("-f"));
    assert_eq!(key.as_deref(), Some("v"));
    assert_eq!(first.as_deref(), Some("a"));
    assert_eq!(second.as_deref(), Some("b"));
}

#[test]
fn malformed_input_is_collected_not_fatal() {
    let recorder = Rc::new(Recorder::default());
    let schema = Schema::new()
        .add(Unary::new("--apple").flag('a'))
        .add(Keyword::new("--key"));

    let mut scanner =
        Scanner::with_interface(schema, Rc::clone(&recorder) as Rc<dyn UserInterface>).unwrap();
    let errors = scanner.scan(&["program", "--moot", "-ax", "stray", "--key"]);

    assert_eq!(errors, 4);
    assert_eq!(
        *recorder.errors.borrow(),
        vec![
            "invalid argument: \"--moot\"".to_string(),
            "invalid flag 'x' in argument \"-ax\"".to_string(),
            "unexpected positional argument \"stray\"".to_string(),
            "expected an argument after \"--key\"".to_string(),
        ]
    );
}

#[test]
fn help_screen_idempotent() {
    let recorder = Rc::new(Recorder::default());
    let schema = Schema::new()
        .add(Unary::new("--foo").flag('f').help(" -f, --foo    Sets foo."))
        .add(Keyword::new("--key").help(" --key <val>  Sets key to val."))
        .add(Positional::new().help(" input        The input file."));

    let scanner =
        Scanner::with_interface(schema, Rc::clone(&recorder) as Rc<dyn UserInterface>).unwrap();

    scanner.print_help();
    let first = recorder.messages.borrow().clone();
    scanner.print_help();
    let second = recorder.messages.borrow().clone();

    assert_eq!(
        first,
        vec![
            " -f, --foo    Sets foo.".to_string(),
            " --key <val>  Sets key to val.".to_string(),
            " input        The input file.".to_string(),
        ]
    );
    assert_eq!(second[first.len()..], first[..]);
    assert!(recorder.errors.borrow().is_empty());
}

#[test]
fn handlers_feed_back_through_cells() {
    let sets = Cell::new(0);
    let clears = Cell::new(0);
    let schema = Schema::new().add(
        Unary::new("--verbose")
            .flag('v')
            .negation("--quiet")
            .on_set(|| sets.set(sets.get() + 1))
            .on_clear(|| clears.set(clears.get() + 1)),
    );

    let mut scanner = Scanner::with_interface(schema, Rc::new(Discard::default())).unwrap();
    let errors = scanner.scan(&["program", "-v", "--verbose", "--quiet"]);

    assert_eq!(errors, 0);
    assert_eq!(sets.get(), 2);
    assert_eq!(clears.get(), 1);
}

#[test]
fn repeated_scans_share_the_table() {
    let mut slot: Option<String> = None;
    let schema = Schema::new().add(Positional::new().bind(&mut slot));

    let mut scanner = Scanner::with_interface(schema, Rc::new(Discard::default())).unwrap();
    assert_eq!(scanner.scan(&["program", "first"]), 0);
    assert_eq!(scanner.scan(&["program", "second", "excess"]), 1);

    drop(scanner);
    assert_eq!(slot.as_deref(), Some("second"));
}
