use proptest::prelude::*;
use tabular_dp::problems::lcs::Lcs;
use tabular_dp::problems::scs::Scs;
use tabular_dp::utils::is_subsequence;

proptest! {
    #[test]
    fn length_law(a in "[a-c]{0,14}", b in "[a-c]{0,14}") {
        let (x, y) = (a.as_bytes(), b.as_bytes());
        let lcs = Lcs::new(x, y).length() as usize;
        prop_assert_eq!(Scs::new(x, y).length(), x.len() + y.len() - lcs);
    }

    #[test]
    fn reconstruction_has_the_optimal_length(a in "[a-c]{0,14}", b in "[a-c]{0,14}") {
        let (x, y) = (a.as_bytes(), b.as_bytes());
        let scs = Scs::new(x, y);
        prop_assert_eq!(scs.sequence().len(), scs.length());
    }

    #[test]
    fn reconstruction_contains_both_inputs(a in "[a-c]{0,14}", b in "[a-c]{0,14}") {
        let (x, y) = (a.as_bytes(), b.as_bytes());
        let seq = Scs::new(x, y).sequence();
        prop_assert!(is_subsequence(x, &seq));
        prop_assert!(is_subsequence(y, &seq));
    }

    #[test]
    fn supersequence_of_identical_inputs_is_the_input(a in "[a-c]{0,14}") {
        let x = a.as_bytes();
        prop_assert_eq!(Scs::new(x, x).sequence(), x.to_vec());
    }
}
