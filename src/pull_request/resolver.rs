use super::config::{PartialPullRequestConfig, PrConfigInput, PullRequestConfig};
use std::ops::Deref;

/// A configuration with every field populated, plus whether the base branch
/// was chosen by the caller or the client rather than the built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    config: PullRequestConfig,
    explicit_base_branch: bool,
}

impl ResolvedConfig {
    pub fn explicit_base_branch(&self) -> Option<&str> {
        self.explicit_base_branch
            .then_some(self.config.base_branch.as_str())
    }

    pub fn into_inner(self) -> PullRequestConfig {
        self.config
    }
}

impl Deref for ResolvedConfig {
    type Target = PullRequestConfig;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}

/// Merges the per-call input over the client defaults over the built-in
/// defaults, field by field.
pub fn resolve(defaults: &PartialPullRequestConfig, input: &PrConfigInput) -> ResolvedConfig {
    match input {
        PrConfigInput::Config(config) => ResolvedConfig {
            config: config.clone(),
            explicit_base_branch: true,
        },
        PrConfigInput::Overrides(overrides) => {
            let layered = layer(overrides.clone(), defaults.clone());
            let explicit_base_branch = layered.base_branch.is_some();

            ResolvedConfig {
                config: fill(layered, PullRequestConfig::default()),
                explicit_base_branch,
            }
        }
    }
}

fn layer(upper: PartialPullRequestConfig, lower: PartialPullRequestConfig) -> PartialPullRequestConfig {
    PartialPullRequestConfig {
        title: upper.title.or(lower.title),
        description: upper.description.or(lower.description),
        base_branch: upper.base_branch.or(lower.base_branch),
        draft: upper.draft.or(lower.draft),
        labels: upper.labels.or(lower.labels),
        reviewers: upper.reviewers.or(lower.reviewers),
        team_reviewers: upper.team_reviewers.or(lower.team_reviewers),
        merge_strategy: upper.merge_strategy.or(lower.merge_strategy),
        delete_branch_on_merge: upper.delete_branch_on_merge.or(lower.delete_branch_on_merge),
        auto_merge: upper.auto_merge.or(lower.auto_merge),
        commit_message: upper.commit_message.or(lower.commit_message),
    }
}

fn fill(layer: PartialPullRequestConfig, base: PullRequestConfig) -> PullRequestConfig {
    PullRequestConfig {
        title: layer.title.unwrap_or(base.title),
        description: layer.description.or(base.description),
        base_branch: layer.base_branch.unwrap_or(base.base_branch),
        draft: layer.draft.unwrap_or(base.draft),
        labels: layer.labels.unwrap_or(base.labels),
        reviewers: layer.reviewers.unwrap_or(base.reviewers),
        team_reviewers: layer.team_reviewers.unwrap_or(base.team_reviewers),
        merge_strategy: layer.merge_strategy.unwrap_or(base.merge_strategy),
        delete_branch_on_merge: layer
            .delete_branch_on_merge
            .unwrap_or(base.delete_branch_on_merge),
        auto_merge: layer.auto_merge.unwrap_or(base.auto_merge),
        commit_message: layer.commit_message.or(base.commit_message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pull_request::config::MergeStrategy;

    /// Checks one field across the four combinations of client default and
    /// call override.
    macro_rules! precedence {
        ($name:ident, $field:ident, builtin = $builtin:expr, instance = $instance:expr, call = $call:expr) => {
            #[test]
            fn $name() {
                let with = |value| PartialPullRequestConfig {
                    $field: Some(value),
                    ..Default::default()
                };
                let none = PartialPullRequestConfig::default();

                let resolved = resolve(&none, &PrConfigInput::Overrides(none.clone()));
                assert_eq!(resolved.$field, $builtin);

                let resolved = resolve(&with($instance), &PrConfigInput::Overrides(none.clone()));
                assert_eq!(resolved.$field, $instance);

                let resolved = resolve(&none, &PrConfigInput::Overrides(with($call)));
                assert_eq!(resolved.$field, $call);

                let resolved = resolve(&with($instance), &PrConfigInput::Overrides(with($call)));
                assert_eq!(resolved.$field, $call);
            }
        };
    }

    precedence!(title_precedence, title,
        builtin = "Automated changes".to_owned(), instance = "Instance".to_owned(), call = "Call".to_owned());
    precedence!(base_branch_precedence, base_branch,
        builtin = "main".to_owned(), instance = "develop".to_owned(), call = "release".to_owned());
    precedence!(draft_precedence, draft, builtin = false, instance = true, call = false);
    precedence!(labels_precedence, labels,
        builtin = Vec::<String>::new(), instance = vec!["a".to_owned()], call = vec!["b".to_owned()]);
    precedence!(reviewers_precedence, reviewers,
        builtin = Vec::<String>::new(), instance = vec!["alice".to_owned()], call = vec!["bob".to_owned()]);
    precedence!(team_reviewers_precedence, team_reviewers,
        builtin = Vec::<String>::new(), instance = vec!["core".to_owned()], call = vec!["docs".to_owned()]);
    precedence!(merge_strategy_precedence, merge_strategy,
        builtin = MergeStrategy::Squash, instance = MergeStrategy::Merge, call = MergeStrategy::Rebase);
    precedence!(delete_branch_on_merge_precedence, delete_branch_on_merge,
        builtin = true, instance = false, call = true);
    precedence!(auto_merge_precedence, auto_merge, builtin = false, instance = true, call = false);

    #[test]
    fn optional_fields_fall_through_layers() {
        let none = PartialPullRequestConfig::default();
        let instance = PartialPullRequestConfig::new()
            .description("from client")
            .commit_message("client message");
        let call = PartialPullRequestConfig::new().commit_message("call message");

        let resolved = resolve(&none, &PrConfigInput::Overrides(none.clone()));
        assert_eq!(resolved.description, None);
        assert_eq!(resolved.commit_message, None);

        let resolved = resolve(&instance, &PrConfigInput::Overrides(call));
        assert_eq!(resolved.description.as_deref(), Some("from client"));
        assert_eq!(resolved.commit_message.as_deref(), Some("call message"));
    }

    #[test]
    fn should_only_override_fields_set_by_the_call() {
        let instance = PartialPullRequestConfig::new()
            .labels(["client"])
            .draft(true)
            .merge_strategy(MergeStrategy::Merge);
        let call = PartialPullRequestConfig::new().title("T");

        let resolved = resolve(&instance, &PrConfigInput::Overrides(call));

        assert_eq!(resolved.title, "T");
        assert_eq!(resolved.labels, vec!["client"]);
        assert!(resolved.draft);
        assert_eq!(resolved.merge_strategy, MergeStrategy::Merge);
        assert!(resolved.delete_branch_on_merge);
    }

    #[test]
    fn full_config_replaces_every_layer() {
        let instance = PartialPullRequestConfig::new().labels(["client"]).draft(true);
        let config = PullRequestConfig {
            title: "Full".to_owned(),
            ..Default::default()
        };

        let resolved = resolve(&instance, &PrConfigInput::Config(config.clone()));

        assert_eq!(resolved.clone().into_inner(), config);
        assert_eq!(resolved.explicit_base_branch(), Some("main"));
    }

    #[test]
    fn base_branch_is_explicit_only_when_a_layer_sets_it() {
        let none = PartialPullRequestConfig::default();

        let resolved = resolve(&none, &PrConfigInput::default());
        assert_eq!(resolved.explicit_base_branch(), None);
        assert_eq!(resolved.base_branch, "main");

        let instance = PartialPullRequestConfig::new().base_branch("develop");
        let resolved = resolve(&instance, &PrConfigInput::default());
        assert_eq!(resolved.explicit_base_branch(), Some("develop"));

        let call = PartialPullRequestConfig::new().base_branch("release");
        let resolved = resolve(&instance, &PrConfigInput::Overrides(call));
        assert_eq!(resolved.explicit_base_branch(), Some("release"));
    }

    #[test]
    fn should_not_mutate_client_defaults() {
        let instance = PartialPullRequestConfig::new().labels(["client"]);
        let snapshot = instance.clone();

        let mut resolved = resolve(&instance, &PrConfigInput::default()).into_inner();
        resolved.labels.push("mutated".to_owned());

        assert_eq!(instance, snapshot);
        assert_eq!(
            resolve(&instance, &PrConfigInput::default()).labels,
            vec!["client"]
        );
    }
}
