//! Linguistic annotation capability used by the pattern-scan candidate
//! source.
//!
//! The extractor only needs tokens with a lemma, a coarse part-of-speech,
//! and a syntactic head pointer with a dependency label. Any conformant
//! tagger/parser can sit behind [`DependencyTagger`]; the shipped
//! [`RuleBasedTagger`] is a small deterministic approximation built from
//! closed-class lexicons and positional attachment rules.

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adposition,
    Conjunction,
    Determiner,
    Pronoun,
    Number,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepLabel {
    Root,
    DirectObject,
    Attribute,
    Conjunct,
    Subject,
    Preposition,
    PrepObject,
    Modifier,
    Dep,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PosTag,
    /// Index of the syntactic head within the token sequence. The root
    /// points at itself.
    pub head: usize,
    pub dep: DepLabel,
}

pub trait DependencyTagger {
    fn parse(&self, text: &str) -> Vec<Token>;
}

/// Deterministic rule-based tagger.
///
/// POS comes from closed-class word lists plus suffix heuristics; heads are
/// assigned per sentence with positional rules (verb as root, prepositions
/// attach right, coordination attaches to the first conjunct). Adequate for
/// the short declarative fragments resumes are made of.
pub struct RuleBasedTagger {
    verbs: HashSet<&'static str>,
    copulas: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    adpositions: HashSet<&'static str>,
    conjunctions: HashSet<&'static str>,
    determiners: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
}

impl Default for RuleBasedTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedTagger {
    pub fn new() -> Self {
        Self {
            verbs: [
                "developed", "built", "designed", "implemented", "led", "managed",
                "created", "maintained", "deployed", "wrote", "used", "delivered",
                "mentored", "have", "has", "had", "gained", "acquired", "demonstrated",
            ]
            .into(),
            copulas: ["is", "am", "are", "was", "were", "be", "been", "being"].into(),
            adjectives: [
                "proficient", "skilled", "familiar", "experienced", "advanced",
                "senior", "strong", "basic", "expert", "junior", "extensive",
            ]
            .into(),
            adpositions: [
                "in", "with", "of", "on", "at", "for", "to", "from", "by", "using",
            ]
            .into(),
            conjunctions: ["and", "or", "but"].into(),
            determiners: ["a", "an", "the", "this", "that", "these", "those"].into(),
            pronouns: ["i", "he", "she", "we", "they", "you", "it"].into(),
        }
    }

    fn tag_pos(&self, lemma: &str) -> PosTag {
        if self.copulas.contains(lemma) || self.verbs.contains(lemma) {
            PosTag::Verb
        } else if self.adjectives.contains(lemma) {
            PosTag::Adjective
        } else if self.adpositions.contains(lemma) {
            PosTag::Adposition
        } else if self.conjunctions.contains(lemma) {
            PosTag::Conjunction
        } else if self.determiners.contains(lemma) {
            PosTag::Determiner
        } else if self.pronouns.contains(lemma) {
            PosTag::Pronoun
        } else if lemma.chars().all(|c| c.is_ascii_digit() || c == '+' || c == '-') {
            PosTag::Number
        } else {
            PosTag::Noun
        }
    }

    fn is_copula(&self, lemma: &str) -> bool {
        self.copulas.contains(lemma)
    }

    /// Attach heads and labels within one sentence, in place.
    fn attach(&self, tokens: &mut [Token], start: usize, end: usize) {
        if start >= end {
            return;
        }
        let sentence = start..end;

        // Root: first verb, else first noun, else the first token.
        let root = sentence
            .clone()
            .find(|&i| tokens[i].pos == PosTag::Verb)
            .or_else(|| sentence.clone().find(|&i| tokens[i].pos == PosTag::Noun))
            .unwrap_or(start);
        tokens[root].head = root;
        tokens[root].dep = DepLabel::Root;

        let mut last_verb: Option<usize> = if tokens[root].pos == PosTag::Verb {
            Some(root)
        } else {
            None
        };
        let mut last_noun: Option<usize> = None;
        let mut last_prep: Option<usize> = None;
        let mut pending_conj: Option<usize> = None;

        for i in sentence {
            if i == root {
                if tokens[i].pos == PosTag::Noun {
                    last_noun = Some(i);
                }
                continue;
            }
            match tokens[i].pos {
                PosTag::Verb => {
                    tokens[i].head = root;
                    tokens[i].dep = DepLabel::Dep;
                    last_verb = Some(i);
                    last_noun = None;
                    last_prep = None;
                }
                PosTag::Adposition => {
                    tokens[i].head = last_noun.or(last_verb).unwrap_or(root);
                    tokens[i].dep = DepLabel::Preposition;
                    last_prep = Some(i);
                }
                PosTag::Conjunction => {
                    tokens[i].head = last_noun.or(last_verb).unwrap_or(root);
                    tokens[i].dep = DepLabel::Dep;
                    pending_conj = last_noun;
                }
                PosTag::Noun | PosTag::Pronoun | PosTag::Number => {
                    if let Some(first) = pending_conj.take() {
                        // Coordination attaches to the first conjunct.
                        tokens[i].head = first;
                        tokens[i].dep = DepLabel::Conjunct;
                    } else if let Some(prep) = last_prep.take() {
                        tokens[i].head = prep;
                        tokens[i].dep = DepLabel::PrepObject;
                    } else if let Some(verb) = last_verb {
                        let copula = self.is_copula(&tokens[verb].lemma);
                        if tokens[i].pos == PosTag::Pronoun && i < verb {
                            tokens[i].head = verb;
                            tokens[i].dep = DepLabel::Subject;
                        } else {
                            tokens[i].head = verb;
                            tokens[i].dep = if copula {
                                DepLabel::Attribute
                            } else {
                                DepLabel::DirectObject
                            };
                        }
                    } else {
                        tokens[i].head = root;
                        tokens[i].dep = DepLabel::Dep;
                    }
                    if tokens[i].pos == PosTag::Noun {
                        last_noun = Some(i);
                    }
                }
                PosTag::Adjective => {
                    // Next noun in the sentence if any, else the governing verb.
                    let next_noun = (i + 1..end).find(|&j| tokens[j].pos == PosTag::Noun);
                    if let Some(noun) = next_noun {
                        tokens[i].head = noun;
                        tokens[i].dep = DepLabel::Modifier;
                    } else {
                        tokens[i].head = last_verb.unwrap_or(root);
                        tokens[i].dep = DepLabel::Attribute;
                    }
                }
                PosTag::Determiner | PosTag::Other => {
                    tokens[i].head = root;
                    tokens[i].dep = DepLabel::Dep;
                }
            }
        }
    }
}

impl DependencyTagger for RuleBasedTagger {
    fn parse(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut boundaries = Vec::new();

        for sentence in text.split(|c| ['.', '!', '?', ';', '\n'].contains(&c)) {
            let start = tokens.len();
            for word in sentence.unicode_words() {
                let lemma = word.to_lowercase();
                let pos = self.tag_pos(&lemma);
                tokens.push(Token {
                    text: word.to_string(),
                    lemma,
                    pos,
                    head: tokens.len(),
                    dep: DepLabel::Dep,
                });
            }
            if tokens.len() > start {
                boundaries.push((start, tokens.len()));
            }
        }

        for (start, end) in boundaries {
            self.attach(&mut tokens, start, end);
        }
        tokens
    }
}
