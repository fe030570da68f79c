//! Policy patterns and fixed texts shared by the predicate families.

use std::sync::LazyLock;

use regex::Regex;

/// Accepted branch syntaxes: `enhancement-<epoch>`, `<issue>-<slug>`,
/// `<kind>/issue#<id>` and `<kind>/epoch#<epoch>`.
pub const RULE_BRANCHNAME: &str = r"^((enhancement-\d{1,11})|(feature|feat|bug|bugfix|fix|refactor)/(epoch|issue)#([0-9]+)|([0-9]+-[a-z0-9áàãâéèêíìóòõôúùüç\-_]+))$";

/// Branch-name fragments that are never accepted, anywhere, in any case.
pub const REFUSED_BRANCH_WORDS: &[&str] = &["wip"];

/// Characters a branch name may contain. Length is counted separately.
pub const RULE_BRANCHNAME_CHARSET: &str = r"^[\w/#-]+$";

/// Inclusive bounds on a branch name, in characters.
pub const BRANCHNAME_MIN_LEN: usize = 3;
pub const BRANCHNAME_MAX_LEN: usize = 255;

pub const PROTECTED_MAIN: &[&str] = &["main", "master"];
pub const PROTECTED_DEV: &[&str] = &["dev", "development"];
pub const PROTECTED_TAGS: &[&str] = &["tags"];

/// Conventional commit subject with a mandatory `#<issue>` reference.
pub const RULE_COMMITFORMAT: &str = r"(?i)^(((Merge|Bumping|Revert)|(bugfix|build|chore|ci|docs|feat|feature|fix|other|perf|refactor|revert|style|test)(\(.*\))?!?: #[0-9]+) .*(\n.*)*)$";

/// Commit types accepted by the type-prefix check.
pub const COMMIT_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

pub const SNAKE_CASE: &str = r"^[a-z_][a-z_0-9]+$";

/// Directory names that hold tests.
pub const TEST_DIRECTORY: &str = r"^.*tests?.*$";

/// Hard ceiling for the configurable subject-line minimum.
pub const SUBJECT_MIN_CEILING: usize = 10;
/// Hard ceiling for the configurable subject-line maximum.
pub const SUBJECT_MAX_CEILING: usize = 50;

/// Byte markers that only appear inside private key material.
pub const PRIVATE_KEY_BLACKLIST: &[&str] = &[
    "BEGIN RSA PRIVATE KEY",
    "BEGIN DSA PRIVATE KEY",
    "BEGIN EC PRIVATE KEY",
    "BEGIN OPENSSH PRIVATE KEY",
    "BEGIN PRIVATE KEY",
    "PuTTY-User-Key-File-2",
    "BEGIN SSH2 ENCRYPTED PRIVATE KEY",
    "BEGIN PGP PRIVATE KEY BLOCK",
    "BEGIN ENCRYPTED PRIVATE KEY",
    "BEGIN OpenVPN Static key V1",
];

pub const BRANCH_SYNTAX_HELP: &str = "\n:: Permitted syntaxes:
 - #1: 'enhancement-<epoch-timestamp>'; or
 - #2: '<issue-id>-descrição-da-issue'; or
 - #3: '<(feature|feat|bug|bugfix|fix)>/issue#<issue-id>'; or
 - #4: '<(feature|feat|bug|bugfix|fix)>/epoch#<epoch-timestamp>'
";

pub const COMMIT_FORMAT_HELP: &str = "Your commit was rejected due to the invalid commit message...

    Please use the following format:
      <type>(optional scope): #id-issue <description>

    type values: feature | feat, bugfix | fix, chore, refactor, docs, style, test, perf, ci, build or revert

    Examples:
      #1 <type>: #id-issue <description>:
            git commit -m 'feature: #1234 feature example comment'
      #2 <type>(scope): #id-issue <description>:
            git commit -m 'feat(docs): #1234 feature example comment'
      #3 <type>(scope): #id-issue <description>:
            git commit -m 'fix(ui): #4321 bugfix example comment'
      #4 <type>!: #id-issue <description>:
            git commit -m 'fix!: #4321 chore example comment with possible breaking change'
      #5 <type>!: #id-issue <description>:
            git commit -m 'bugfix!: #4321 chore example comment with possible breaking change'
      #6 <type>(scope)!: #id-issue <description>:
            git commit -m 'refactor(chore)!: #4321 chore example comment with possible breaking change'
      #7 <type>(scope)!: #id-issue <description>:
            git commit -m 'chore(fix)!: #4321 drop support for Python 2.6' -m 'BREAKING CHANGE: Some features not available in Python 2.7-.'

    More details on https://www.conventionalcommits.org/en/v1.0.0/
";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in policy pattern must compile")
}

pub static BRANCHNAME_RE: LazyLock<Regex> = LazyLock::new(|| compile(RULE_BRANCHNAME));
/// Case-insensitive alternation of [`REFUSED_BRANCH_WORDS`], matched anywhere.
pub static RULE_BRANCHNAME_REFUSED: LazyLock<String> = LazyLock::new(|| {
    let words: Vec<String> = REFUSED_BRANCH_WORDS.iter().map(|w| regex::escape(w)).collect();
    format!("(?i)({})", words.join("|"))
});

pub static BRANCHNAME_REFUSED_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&RULE_BRANCHNAME_REFUSED));
pub static BRANCHNAME_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(RULE_BRANCHNAME_CHARSET));
pub static COMMITFORMAT_RE: LazyLock<Regex> = LazyLock::new(|| compile(RULE_COMMITFORMAT));
pub static COMMIT_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"^({})(\([^)\n]*\))?!?:",
        COMMIT_TYPES.join("|")
    ))
});
pub static SNAKE_CASE_RE: LazyLock<Regex> = LazyLock::new(|| compile(SNAKE_CASE));
pub static TEST_DIRECTORY_RE: LazyLock<Regex> = LazyLock::new(|| compile(TEST_DIRECTORY));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_compile() {
        for re in [
            &*BRANCHNAME_RE,
            &*BRANCHNAME_REFUSED_RE,
            &*BRANCHNAME_CHARSET_RE,
            &*COMMITFORMAT_RE,
            &*COMMIT_TYPE_RE,
            &*SNAKE_CASE_RE,
            &*TEST_DIRECTORY_RE,
        ] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn refused_pattern_covers_refused_words() {
        assert_eq!(RULE_BRANCHNAME_REFUSED.as_str(), "(?i)(wip)");
        for word in REFUSED_BRANCH_WORDS {
            assert!(BRANCHNAME_REFUSED_RE.is_match(word));
            assert!(BRANCHNAME_REFUSED_RE.is_match(&word.to_uppercase()));
        }
    }

    #[test]
    fn charset_accepts_unicode_word_characters() {
        assert!(BRANCHNAME_CHARSET_RE.is_match("42-descrição-da-issue"));
        assert!(BRANCHNAME_CHARSET_RE.is_match("feat/issue#1"));
        assert!(!BRANCHNAME_CHARSET_RE.is_match("has space"));
        assert!(!BRANCHNAME_CHARSET_RE.is_match(""));
    }

    #[test]
    fn commit_types_sorted_and_unique() {
        let mut sorted = COMMIT_TYPES.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, COMMIT_TYPES);
    }

    #[test]
    fn branch_help_lists_four_syntaxes() {
        for n in 1..=4 {
            assert!(BRANCH_SYNTAX_HELP.contains(&format!("#{n}:")));
        }
    }

    #[test]
    fn commit_help_lists_seven_examples() {
        for n in 1..=7 {
            assert!(COMMIT_FORMAT_HELP.contains(&format!("#{n} <type>")));
        }
    }
}
