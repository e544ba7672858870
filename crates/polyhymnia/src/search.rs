use crate::client::{create_client, query_words};
use crate::display::{format_results_json, format_results_table, format_results_text, NO_RESULTS};
use crate::prelude::{eprintln, println, *};
use clap::ArgGroup;
use polyhymnia_core::metadata::{reconcile_metadata, DisplayOptions};
use polyhymnia_core::query::{QueryParams, SearchMode};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(false)
        .args(["means_like", "sounds_like", "spelled_like", "related_word"])
))]
pub struct SearchOptions {
    /// Word or phrase to search for (wildcards allowed with --spelled-like)
    #[arg(value_name = "SEARCH TERM")]
    pub search_term: Option<String>,

    /// Words with meaning similar to this string
    #[arg(short = 'l', long)]
    pub means_like: bool,

    /// Words that sound like this string
    #[arg(short = 'n', long)]
    pub sounds_like: bool,

    /// Words spelled like this string
    #[arg(short = 't', long)]
    pub spelled_like: bool,

    /// Related word constraint code (e.g. syn, ant, jja, rhy); repeatable
    #[arg(long, value_name = "CODE")]
    pub related_word: Vec<String>,

    /// Vocabulary identifier
    #[arg(long, default_value = "")]
    pub vocabulary: String,

    /// Topic words; repeatable
    #[arg(long)]
    pub topics: Vec<String>,

    /// Left context
    #[arg(long, default_value = "")]
    pub left_context: String,

    /// Right context
    #[arg(long, default_value = "")]
    pub right_context: String,

    /// Echo the query term as the first result, with the given metadata code
    #[arg(long, default_value = "")]
    pub query_echo: String,

    /// Maximum number of results to return (1-1000)
    #[arg(long, env = "DATAMUSE_MAX", default_value = "100")]
    pub max: usize,

    /// Metadata flags (dfprs), or "none"
    #[arg(long, default_value = "")]
    pub metadata: String,

    #[command(flatten)]
    pub display: DisplayArgs,

    /// Output as JSON
    #[arg(long, conflicts_with = "table")]
    pub json: bool,

    /// Output as a table
    #[arg(long)]
    pub table: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone, Default)]
pub struct DisplayArgs {
    /// Show number of words returned by query
    #[arg(short = 'c', long)]
    pub count: bool,

    /// Include definitions in results
    #[arg(short = 'd', long)]
    pub def: bool,

    /// Include frequency in results
    #[arg(short = 'f', long)]
    pub freq: bool,

    /// Include parts of speech in results
    #[arg(short = 'p', long)]
    pub pos: bool,

    /// Include pronunciation in results
    #[arg(short = 'r', long)]
    pub pro: bool,

    /// Include score in results
    #[arg(short = 's', long)]
    pub score: bool,

    /// Show the URL used for the query
    #[arg(short = 'q', long)]
    pub show_query: bool,

    /// Include syllables in results
    #[arg(short = 'y', long)]
    pub syl: bool,
}

impl From<&DisplayArgs> for DisplayOptions {
    fn from(args: &DisplayArgs) -> Self {
        DisplayOptions {
            show_count: args.count,
            show_definitions: args.def,
            show_frequency: args.freq,
            show_parts_of_speech: args.pos,
            show_pronunciation: args.pro,
            show_score: args.score,
            show_query_url: args.show_query,
            show_syllables: args.syl,
        }
    }
}

impl SearchOptions {
    pub fn mode(&self) -> SearchMode {
        if self.means_like {
            SearchMode::MeansLike
        } else if self.sounds_like {
            SearchMode::SoundsLike
        } else if self.spelled_like {
            SearchMode::SpelledLike
        } else {
            SearchMode::Related
        }
    }

    /// Resolve the query parameters and the display options.
    ///
    /// Metadata codes typed by the user switch on their display toggles, and
    /// the toggles in turn are folded back into the metadata sent to the API.
    pub fn resolve(&self) -> Result<(QueryParams, DisplayOptions), Error> {
        let search_term = self
            .search_term
            .clone()
            .ok_or(Error::MissingSearchTerm)?;

        let display = DisplayOptions::from(&self.display).with_metadata(&self.metadata);

        let params = QueryParams {
            search_term,
            mode: self.mode(),
            relation_codes: self.related_word.clone(),
            vocabulary: self.vocabulary.clone(),
            left_context: self.left_context.clone(),
            right_context: self.right_context.clone(),
            metadata: reconcile_metadata(&self.metadata, &display),
            query_echo: self.query_echo.clone(),
            topics: self.topics.clone(),
            max: self.max,
        };

        Ok((params, display))
    }
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    let (params, display) = options.resolve()?;

    if global.verbose {
        eprintln!("Datamuse API URL: {}", params.build_url(&global.base_url));
        eprintln!("Timeout: {}s", global.timeout);
    }

    let client = create_client(global.timeout())?;
    let results = query_words(&client, &params, &global.base_url)
        .await
        .context("error querying Datamuse API")?;

    if options.json {
        println!("{}", format_results_json(&results)?);
    } else if results.is_empty() {
        println!("{}", NO_RESULTS);
    } else if options.table {
        format_results_table(&results, &display).printstd();
    } else {
        print!("{}", format_results_text(&results, &display));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_options(term: Option<&str>) -> SearchOptions {
        SearchOptions {
            search_term: term.map(str::to_string),
            means_like: false,
            sounds_like: false,
            spelled_like: false,
            related_word: Vec::new(),
            vocabulary: String::new(),
            topics: Vec::new(),
            left_context: String::new(),
            right_context: String::new(),
            query_echo: String::new(),
            max: 100,
            metadata: String::new(),
            display: DisplayArgs::default(),
            json: false,
            table: false,
        }
    }

    #[test]
    fn test_resolve_missing_search_term() {
        let mut options = create_test_options(None);
        options.means_like = true;

        let err = options.resolve().unwrap_err();
        assert!(matches!(err, Error::MissingSearchTerm));
    }

    #[test]
    fn test_resolve_mode_selection() {
        let mut options = create_test_options(Some("fire"));
        assert_eq!(options.mode(), SearchMode::Related);

        options.sounds_like = true;
        assert_eq!(options.mode(), SearchMode::SoundsLike);
    }

    #[test]
    fn test_resolve_display_flags_become_metadata() {
        let mut options = create_test_options(Some("burn"));
        options.means_like = true;
        options.display.def = true;
        options.display.syl = true;
        options.display.score = true;

        let (params, display) = options.resolve().unwrap();

        assert_eq!(params.metadata, "ds");
        assert!(display.show_score);
        assert_eq!(
            params.build_url(polyhymnia_core::query::DATAMUSE_API_URL),
            "https://api.datamuse.com/words?ml=burn&md=ds&max=100"
        );
    }

    #[test]
    fn test_resolve_metadata_turns_on_display() {
        let mut options = create_test_options(Some("burn"));
        options.means_like = true;
        options.metadata = "rp".to_string();
        options.display.def = true;

        let (params, display) = options.resolve().unwrap();

        assert_eq!(params.metadata, "rpd");
        assert!(display.show_pronunciation);
        assert!(display.show_parts_of_speech);
        assert!(display.show_definitions);
    }

    #[test]
    fn test_resolve_metadata_none() {
        let mut options = create_test_options(Some("burn"));
        options.means_like = true;
        options.metadata = "NONE".to_string();
        options.display.freq = true;

        let (params, _) = options.resolve().unwrap();

        assert_eq!(params.metadata, "f");
    }

    #[test]
    fn test_resolve_related_words() {
        let mut options = create_test_options(Some("fire"));
        options.related_word = vec!["ant".to_string(), "syn".to_string()];
        options.max = 0;

        let (params, _) = options.resolve().unwrap();

        assert_eq!(
            params.build_url(polyhymnia_core::query::DATAMUSE_API_URL),
            "https://api.datamuse.com/words?rel_ant=fire&rel_syn=fire"
        );
    }
}
