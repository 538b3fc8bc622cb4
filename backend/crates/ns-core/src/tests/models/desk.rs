use crate::{Desk, DeskStatus};

use googletest::prelude::*;

#[test]
fn given_desk_code_when_created_then_qr_code_value_derived_from_code() {
    // When
    let desk = Desk::new("D-101", DeskStatus::Available, 0.20, 0.35);

    // Then
    assert_that!(desk.desk_code.as_str(), eq("D-101"));
    assert_that!(desk.qr_code_value.as_str(), eq("desk/D-101"));
    assert_that!(desk.map_x, eq(0.20));
    assert_that!(desk.map_y, eq(0.35));
}
