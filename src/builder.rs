use crate::engine::{PairEngine, SpacePolicy};

/// Builder for [`PairEngine`], mirroring the crate's configure-then-build
/// idiom.
pub struct PairEngineBuilder<R> {
    rule: R,
    policy: Option<SpacePolicy>,
}

impl<R> PairEngineBuilder<R> {
    pub fn new(rule: R) -> Self {
        Self { rule, policy: None }
    }

    pub fn with_policy(mut self, policy: SpacePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn build(self) -> PairEngine<R> {
        match self.policy {
            Some(p) => PairEngine::with_policy(self.rule, p),
            None => PairEngine::new(self.rule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Subsequence;

    #[test]
    fn defaults_to_rolling() {
        let engine = PairEngineBuilder::new(Subsequence::new()).build();
        assert_eq!(engine.policy(), SpacePolicy::Rolling);
    }

    #[test]
    fn explicit_policy_is_kept() {
        let engine = PairEngineBuilder::new(Subsequence::new())
            .with_policy(SpacePolicy::Full)
            .build();
        assert_eq!(engine.policy(), SpacePolicy::Full);
    }
}
