use hakimi_core::{DegreeSequence, HakimiError, HakimiErrorCode, NotGraphicReason};
use rstest::rstest;

#[rstest]
#[case(
    HakimiError::InvalidInputFormat { token: "x".into(), position: 0 },
    HakimiErrorCode::InvalidInputFormat,
    "HAKIMI_INVALID_INPUT_FORMAT",
)]
#[case(
    HakimiError::NotGraphicSequence { reason: NotGraphicReason::ReductionFailed },
    HakimiErrorCode::NotGraphicSequence,
    "HAKIMI_NOT_GRAPHIC_SEQUENCE",
)]
#[case(
    HakimiError::NoGraphAvailable,
    HakimiErrorCode::NoGraphAvailable,
    "HAKIMI_NO_GRAPH_AVAILABLE",
)]
#[case(
    HakimiError::InvalidStartVertex { vertex: 9, vertex_count: 3 },
    HakimiErrorCode::InvalidStartVertex,
    "HAKIMI_INVALID_START_VERTEX",
)]
#[case(
    HakimiError::NoSpanningTreeAvailable,
    HakimiErrorCode::NoSpanningTreeAvailable,
    "HAKIMI_NO_SPANNING_TREE_AVAILABLE",
)]
#[case(
    HakimiError::SequenceTooLong { len: 5, max: 4 },
    HakimiErrorCode::SequenceTooLong,
    "HAKIMI_SEQUENCE_TOO_LONG",
)]
#[case(
    HakimiError::InvalidMaxVertices { got: 0 },
    HakimiErrorCode::InvalidMaxVertices,
    "HAKIMI_INVALID_MAX_VERTICES",
)]
fn returns_expected_error_code(
    #[case] error: HakimiError,
    #[case] expected: HakimiErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(expected.to_string(), code);
}

#[rstest]
#[case("-1,1", NotGraphicReason::NegativeDegree { vertex: 0, degree: -1 })]
#[case(
    "4,4,4,4",
    NotGraphicReason::DegreeTooLarge { vertex: 0, degree: 4, vertex_count: 4 },
)]
#[case("1,1,1", NotGraphicReason::OddDegreeSum { sum: 3 })]
#[case("3,3,3,1", NotGraphicReason::ReductionFailed)]
fn rejections_carry_a_reason(#[case] text: &str, #[case] expected: NotGraphicReason) {
    let sequence: DegreeSequence = text.parse().expect("fixture text parses");
    let err = sequence.check_graphic().expect_err("fixture is not graphic");
    assert_eq!(err.code(), HakimiErrorCode::NotGraphicSequence);
    assert_eq!(err.not_graphic_reason(), Some(expected));
}

#[rstest]
#[case("1,a,2", "a", 1)]
#[case("1,,2", "", 1)]
#[case(" 2 , 2.5 ", "2.5", 1)]
#[case("three", "three", 0)]
fn parse_errors_name_the_token(#[case] text: &str, #[case] token: &str, #[case] position: usize) {
    let err = text
        .parse::<DegreeSequence>()
        .expect_err("fixture text is malformed");
    assert_eq!(
        err,
        HakimiError::InvalidInputFormat {
            token: token.to_owned(),
            position,
        }
    );
    assert!(err.to_string().contains(token));
}

#[test]
fn reasons_render_human_readable_messages() {
    let err = HakimiError::NotGraphicSequence {
        reason: NotGraphicReason::OddDegreeSum { sum: 7 },
    };
    assert_eq!(err.to_string(), "degree sequence is not graphic: degree sum 7 is odd");
    assert_eq!(HakimiError::NoGraphAvailable.not_graphic_reason(), None);
}
