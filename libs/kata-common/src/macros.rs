/// Expand a case table into flat, named `#[test]` functions.
///
/// ```ignore
/// kata_common::kata_tests! {
///     entry = crate::your_function;
///     test_basic_case: "test_input" => "expected_output",
///     test_edge_case: "edge_input" => "edge_output",
/// }
/// ```
///
/// Each row becomes `fn test_basic_case()` which calls the entry once and
/// panics with the mismatch message if the output differs. Inputs and
/// expectations go through `Into`, so `&str` literals work against a
/// `String -> String` entry. Attributes written before a row are kept on the
/// generated function.
#[macro_export]
macro_rules! kata_tests {
    (
        entry = $entry:expr;
        $( $(#[$meta:meta])* $name:ident : $input:expr => $expected:expr ),+ $(,)?
    ) => {
        $(
            #[test]
            $(#[$meta])*
            fn $name() {
                let case = $crate::types::TestCase::new(
                    stringify!($name),
                    ::std::convert::Into::into($input),
                    ::std::convert::Into::into($expected),
                );
                let mut entry = $entry;
                if let Err(err) = $crate::scaffold::check_case(&mut entry, &case) {
                    panic!("{}", err);
                }
            }
        )+
    };
}
