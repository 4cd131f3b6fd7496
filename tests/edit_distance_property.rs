use proptest::prelude::*;
use tabular_dp::problems::edit_distance::EditDistance;
use tabular_dp::problems::lcs::Lcs;

proptest! {
    #[test]
    fn zero_iff_equal(a in "[a-c]{0,14}", b in "[a-c]{0,14}") {
        let d = EditDistance::new(a.as_bytes(), b.as_bytes()).distance();
        prop_assert_eq!(d == 0, a == b);
    }

    #[test]
    fn symmetric(a in "[a-c]{0,14}", b in "[a-c]{0,14}") {
        prop_assert_eq!(
            EditDistance::new(a.as_bytes(), b.as_bytes()).distance(),
            EditDistance::new(b.as_bytes(), a.as_bytes()).distance()
        );
    }

    #[test]
    fn bounded_by_longer_input(a in "[a-c]{0,14}", b in "[a-c]{0,14}") {
        let d = EditDistance::new(a.as_bytes(), b.as_bytes()).distance() as usize;
        prop_assert!(d >= a.len().abs_diff(b.len()));
        prop_assert!(d <= a.len().max(b.len()));
    }

    #[test]
    fn triangle_inequality(a in "[ab]{0,10}", b in "[ab]{0,10}", c in "[ab]{0,10}") {
        let ab = EditDistance::new(a.as_bytes(), b.as_bytes()).distance();
        let bc = EditDistance::new(b.as_bytes(), c.as_bytes()).distance();
        let ac = EditDistance::new(a.as_bytes(), c.as_bytes()).distance();
        prop_assert!(ac <= ab + bc);
    }

    #[test]
    fn bounded_by_the_indel_route_through_the_lcs(a in "[a-c]{0,14}", b in "[a-c]{0,14}") {
        // Deleting down to the LCS and inserting back up costs
        // n + m - 2·LCS; unit-cost replace can only improve on it.
        let (x, y) = (a.as_bytes(), b.as_bytes());
        let lcs = Lcs::new(x, y).length() as usize;
        let d = EditDistance::new(x, y).distance() as usize;
        prop_assert!(d <= x.len() + y.len() - 2 * lcs);
    }
}
