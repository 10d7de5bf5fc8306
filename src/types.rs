//! Fundamental types used by this crate.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Feature name → value mapping attached to a token by the parser,
/// e. g. `Number → Sing`. Insertion-ordered so serialization is stable.
pub type Morphology = IndexMap<String, String>;

/// One position of a parsed document with everything the external parser
/// knows about it. The id is the 0-based position in the document; `head`
/// equals the own id for the sentence root.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: usize,
    pub text: String,
    pub lemma: String,
    pub pos: String,
    pub tag: String,
    pub morphology: Option<Morphology>,
    pub head: usize,
    pub dep: String,
}

impl Token {
    /// Whether this token is its own syntactic governor.
    pub fn is_root(&self) -> bool {
        self.head == self.id
    }

    /// A morphological feature value, if the parser provided one.
    pub fn morph(&self, feature: &str) -> Option<&str> {
        self.morphology
            .as_ref()
            .and_then(|m| m.get(feature))
            .map(|s| s.as_str())
    }

    pub fn lower_text(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn lower_lemma(&self) -> String {
        self.lemma.to_lowercase()
    }

    /// Word tokens are everything except punctuation, symbols and whitespace.
    pub fn is_word(&self) -> bool {
        !matches!(self.pos.as_str(), "PUNCT" | "SYM" | "SPACE")
    }
}

/// Half-open token-id range of one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Sentence {
    pub fn contains(&self, id: usize) -> bool {
        self.start <= id && id < self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Dependency edge of a token as exposed in the annotation bundle.
/// `head` is `None` for the sentence root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub dep: String,
    pub head: Option<usize>,
    pub head_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Past,
    Present,
    Future,
}

impl Tense {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::Past => "past",
            Tense::Present => "present",
            Tense::Future => "future",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Simple,
    Progressive,
    Perfect,
}

impl Aspect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Simple => "simple",
            Aspect::Progressive => "progressive",
            Aspect::Perfect => "perfect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Active,
    Passive,
}

impl Voice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Active => "active",
            Voice::Passive => "passive",
        }
    }
}

/// Tense / aspect / voice derived for a verb token. Axes the rules could not
/// decide stay `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Grammar {
    pub tense: Option<Tense>,
    pub aspect: Option<Aspect>,
    pub voice: Option<Voice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbKind {
    Regular,
    Modal,
    Auxiliary,
    Phrasal,
}

/// Meaning flags of a modal verb, e. g. `can → [ability, permission, possibility]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalInfo {
    pub verb: String,
    pub meanings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhrasalVerb {
    pub base: String,
    pub particles: Vec<String>,
    pub full_form: String,
    pub separable: bool,
    pub meaning: String,
}

/// Verb classification: exactly one of the optional payloads is set for
/// modal / auxiliary / phrasal verbs, none for regular ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbType {
    #[serde(rename = "type")]
    pub kind: VerbKind,
    pub modal: Option<ModalInfo>,
    pub auxiliary: Option<String>,
    pub phrasal: Option<PhrasalVerb>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipleKind {
    Present,
    Past,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipleRole {
    ProgressiveTense,
    PerfectTense,
    PassiveVoice,
    Adjective,
    Gerund,
    AbsoluteConstruction,
    PresentParticiple,
    PastParticiple,
}

/// Role set of a VBG/VBN token. `roles` is never empty; if nothing more
/// specific matched it holds the bare participle role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participle {
    #[serde(rename = "type")]
    pub kind: ParticipleKind,
    pub form: String,
    pub base: String,
    pub roles: Vec<ParticipleRole>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdverbSemantic {
    Manner,
    Time,
    Place,
    Frequency,
    Degree,
    Sentence,
}

impl AdverbSemantic {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdverbSemantic::Manner => "manner",
            AdverbSemantic::Time => "time",
            AdverbSemantic::Place => "place",
            AdverbSemantic::Frequency => "frequency",
            AdverbSemantic::Degree => "degree",
            AdverbSemantic::Sentence => "sentence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdverbMorphology {
    Simple,
    Derived,
    Compound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentencePosition {
    Beginning,
    Middle,
    End,
    Unknown,
}

/// The head a modifier attaches to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifiedWord {
    pub id: usize,
    pub text: String,
    pub lemma: String,
    pub pos: String,
    pub relation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdverbClassification {
    pub semantic: AdverbSemantic,
    pub morphological: AdverbMorphology,
    pub modifies: Option<ModifiedWord>,
    pub position: SentencePosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjectiveKind {
    Descriptive,
    Quantitative,
    Demonstrative,
    Possessive,
    Interrogative,
    Distributive,
    Indefinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Degree {
    Positive,
    Comparative,
    Superlative,
}

/// Comparison degree of an adjective together with the recovered base form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeInfo {
    pub degree: Degree,
    pub base_form: String,
    pub is_irregular: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormationType {
    Regular,
    Irregular,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationRules {
    pub formation_type: FormationType,
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjectiveAnalysis {
    #[serde(rename = "type")]
    pub kind: AdjectiveKind,
    pub degree: DegreeInfo,
    pub formation_rules: FormationRules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrepositionType {
    Time,
    Place,
    Direction,
    Agent,
    Instrument,
    Purpose,
    Possession,
    Manner,
    Cause,
    Concession,
    Exception,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseModifier {
    pub text: String,
    pub pos: String,
    pub dep: String,
}

/// The phrase spanned from the preposition through its object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepositionalPhrase {
    pub preposition: String,
    pub object: Option<String>,
    pub object_pos: Option<String>,
    pub modifiers: Vec<PhraseModifier>,
    pub full_phrase: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepositionAnalysis {
    #[serde(rename = "type")]
    pub kind: PrepositionType,
    pub prepositional_phrase: PrepositionalPhrase,
    pub is_multiword: bool,
}

/// A prepositional phrase whose object governs another preposition,
/// e. g. "in the house *on the hill*".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedPhrase {
    pub outer_preposition: String,
    pub outer_object: String,
    pub inner_preposition: String,
    pub inner_object: Option<String>,
    pub sentence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyNode {
    pub id: usize,
    pub text: String,
    pub pos: String,
    pub dep: String,
}

/// Edge from a child token to its head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub source: usize,
    pub target: usize,
    pub relation: String,
}

/// The document-wide dependency graph. `root` falls back to token 0 when the
/// parse contains no ROOT-labeled token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyTree {
    pub root: usize,
    pub nodes: Vec<DependencyNode>,
    pub edges: Vec<DependencyEdge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    SubjectVerbAgreement,
    ArticleUsage,
    TenseConsistency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One rule-based grammar diagnosis. Produced fresh per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarFinding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionalType {
    #[serde(rename = "type_1")]
    Type1,
    #[serde(rename = "type_2")]
    Type2,
    #[serde(rename = "type_3")]
    Type3,
}

/// A grammar construction anchored to a sentence span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GrammarConstruction {
    Tense {
        tense_name: String,
        tense: Tense,
        aspect: Aspect,
        voice: Voice,
        verb: String,
        verb_id: usize,
        sentence: String,
        sentence_start: usize,
        sentence_end: usize,
    },
    Conditional {
        conditional_type: ConditionalType,
        sentence: String,
        sentence_start: usize,
        sentence_end: usize,
    },
    ReportedSpeech {
        reporting_verb: String,
        verb_id: usize,
        sentence: String,
        sentence_start: usize,
        sentence_end: usize,
    },
    PassiveVoice {
        verb: String,
        verb_id: usize,
        tense: Option<Tense>,
        aspect: Option<Aspect>,
        sentence: String,
        sentence_start: usize,
        sentence_end: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalDiversity {
    pub ttr: f64,
    pub unique_words: usize,
    pub total_words: usize,
    pub vocabulary_richness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityBand {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryDifficult,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleschKincaid {
    pub score: f64,
    pub grade_level: f64,
    pub readability: ReadabilityBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityLevel {
    pub cefr_level: CefrLevel,
    pub level_description: String,
    pub confidence: Confidence,
}

/// Document-scoped complexity aggregate, recomputed fully per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    pub average_sentence_length: f64,
    pub average_dependency_depth: f64,
    pub complexity_coefficient: f64,
    pub lexical_diversity: LexicalDiversity,
    pub flesch_kincaid: FleschKincaid,
    pub readability_level: ReadabilityLevel,
    pub sentence_count: usize,
    pub word_count: usize,
    pub syllable_count: usize,
    pub character_count: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParticipleStats {
    pub total: usize,
    pub present: usize,
    pub past: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VerbStats {
    pub total: usize,
    pub modal: usize,
    pub auxiliary: usize,
    pub phrasal: usize,
    pub regular: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdverbStats {
    pub total: usize,
    pub by_semantic: IndexMap<String, usize>,
}

/// Aggregated counts over the per-token classifier outputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub pos_distribution: IndexMap<String, usize>,
    pub participles: ParticipleStats,
    pub verbs: VerbStats,
    pub adverbs: AdverbStats,
}

/// A token as exposed in the annotation bundle: the parser-provided fields
/// plus the derived annotations, each `None` when the token's POS does not
/// apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub id: usize,
    pub text: String,
    pub lemma: String,
    pub pos: String,
    pub tag: String,
    pub morphology: Option<Morphology>,
    pub dependency: Dependency,
    pub grammar: Option<Grammar>,
    pub verb_type: Option<VerbType>,
    pub participle: Option<Participle>,
    pub adverb: Option<AdverbClassification>,
    pub adjective: Option<AdjectiveAnalysis>,
    pub preposition_analysis: Option<PrepositionAnalysis>,
}

/// One immutable annotation bundle per request.
///
/// The optional groups are independently nullable for callers: earlier
/// analysis-format versions omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub tokens: Vec<AnnotatedToken>,
    pub sentences: Vec<Sentence>,
    pub dependency_tree: DependencyTree,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grammar_check: Option<Vec<GrammarFinding>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grammar_constructions: Option<Vec<GrammarConstruction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_prepositional_phrases: Option<Vec<NestedPhrase>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity_metrics: Option<ComplexityMetrics>,
}
