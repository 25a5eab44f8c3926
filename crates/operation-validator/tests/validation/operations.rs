use super::expect_error_code;
use super::expect_valid;

#[test]
fn distinct_operation_names() {
    expect_valid(
        r#"
        query A { owner { name } }
        query B { owner { name } }
        mutation C { adopt(id: "1") { name } }
        "#,
    );
}

#[test]
fn duplicate_operation_name() {
    expect_error_code(
        r#"
        query Pets { pets { name } }
        mutation Pets { adopt(id: "1") { name } }
        "#,
        "OPERATION_NAME_MUST_BE_UNIQUE",
        "there can be only one operation named `Pets`",
    );
}

#[test]
fn lone_anonymous_operation() {
    expect_valid("{ owner { name } }");
    expect_error_code(
        r#"
        { owner { name } }
        query B { owner { name } }
        "#,
        "LONE_ANONYMOUS_OPERATION",
        "anonymous operation must be the only defined operation",
    );
}

#[test]
fn anonymous_operation_alongside_fragments() {
    expect_valid(
        r#"
        { owner { ...OwnerName } }
        fragment OwnerName on Owner { name }
        "#,
    );
}

#[test]
fn subscription_with_one_root_field() {
    expect_valid("subscription Added { petAdded { name } }");
}

#[test]
fn subscription_with_two_root_fields() {
    expect_error_code(
        "subscription Changes { petAdded { name } petRemoved { name } }",
        "SUBSCRIPTION_SINGLE_ROOT_FIELD",
        "subscription operation `Changes` must select exactly one top level field",
    );
}

#[test]
fn subscription_root_fields_through_a_fragment() {
    expect_error_code(
        r#"
        subscription { ...Changes }
        fragment Changes on Subscription {
          petAdded { name }
          petRemoved { name }
        }
        "#,
        "SUBSCRIPTION_SINGLE_ROOT_FIELD",
        "subscription anonymous operation must select exactly one top level field",
    );
}
