use std::collections::BTreeSet;

use code_obfuscator::collector::NameCollector;

fn collect(src: &str) -> BTreeSet<String> {
    let file = syn::parse_file(src).unwrap();
    NameCollector::new().collect(&file)
}

#[test]
fn collects_functions_structs_and_enums() {
    let names = collect(
        "pub fn add(a: i32, b: i32) -> i32 { a + b }\n\
         struct Account { balance: i64 }\n\
         enum Kind { A, B }",
    );
    assert!(names.contains("add"));
    assert!(names.contains("Account"));
    assert!(names.contains("Kind"));
    assert!(!names.contains("balance"));
    assert!(!names.contains("A"));
}

#[test]
fn collects_methods_inside_impl_blocks() {
    let names = collect(
        "struct Wallet;\n\
         impl Wallet {\n\
             fn deposit(&mut self, amount: u64) {}\n\
         }",
    );
    assert!(names.contains("Wallet"));
    assert!(names.contains("deposit"));
    assert!(!names.contains("amount"));
}

#[test]
fn collects_trait_method_declarations() {
    let names = collect(
        "trait Store {\n\
             fn persist(&self);\n\
         }\n\
         struct Disk;\n\
         impl Store for Disk {\n\
             fn persist(&self) {}\n\
         }",
    );
    assert!(names.contains("persist"));
    assert!(names.contains("Disk"));
}

#[test]
fn collects_nested_functions() {
    let names = collect(
        "fn outer() {\n\
             fn inner() {}\n\
             inner();\n\
         }",
    );
    assert!(names.contains("outer"));
    assert!(names.contains("inner"));
}

#[test]
fn ignores_parameters_and_locals() {
    let names = collect(
        "fn compute(base_pay: i64, bonus: i64) -> i64 {\n\
             let gross = base_pay + bonus;\n\
             gross\n\
         }",
    );
    assert_eq!(names.len(), 1);
    assert!(names.contains("compute"));
}

#[test]
fn is_deterministic_for_the_same_tree() {
    let src = "fn a() {} fn b() {} struct C;";
    assert_eq!(collect(src), collect(src));
}
