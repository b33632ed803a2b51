use std::path::PathBuf;

use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use clap::Parser;
use log::{error, info};

use rs_sent_core::io::read_corpus;
use rs_sent_core::{GenerationInput, Generator, LanguageModel, OutputMode, SentGenError, Sentence};
use serde::Deserialize;

/// Command-line configuration of the server
#[derive(Parser, Debug)]
#[command(name = "rs-sent-server", version, about = "Serve sentences generated from a corpus")]
struct Args {
	/// Text file to use as a corpus
	corpus: PathBuf,

	/// Number of words to look back as context
	#[arg(short, long, default_value_t = 2)]
	chain_length: usize,

	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	#[arg(short, long, default_value_t = 5000)]
	port: u16,
}

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	as_list: Option<bool>,
	max_steps: Option<usize>,
}

impl GenerateParams {
	/// Builds the generation input, rejecting a zero step bound.
	fn generation_input(&self) -> Result<GenerationInput, SentGenError> {
		let output = if self.as_list.unwrap_or(false) { OutputMode::Tokens } else { OutputMode::Text };
		let mut input = GenerationInput::new(output);
		if let Some(max_steps) = self.max_steps {
			input.set_max_steps(max_steps)?;
		}
		Ok(input)
	}
}

fn error_response(e: SentGenError) -> HttpResponse {
	match e {
		SentGenError::InvalidMaxSteps => HttpResponse::BadRequest().body(e.to_string()),
		SentGenError::GenerationExhausted { .. } => HttpResponse::ServiceUnavailable().body(e.to_string()),
		_ => {
			error!("generation failed: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one sentence. Returns plain text, or a JSON array of tokens
/// when `as_list=true`.
#[get("/v1/generate")]
async fn get_generated(model: web::Data<LanguageModel>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.generation_input() {
		Ok(input) => input,
		Err(e) => return error_response(e),
	};

	match Generator::new(&model, input).generate() {
		Ok(Sentence::Text(text)) => HttpResponse::Ok().body(text),
		Ok(Sentence::Tokens(tokens)) => HttpResponse::Ok().json(tokens),
		Err(e) => error_response(e),
	}
}

/// HTTP GET endpoint `/v1/model`, returning model statistics as JSON.
#[get("/v1/model")]
async fn get_model(model: web::Data<LanguageModel>) -> impl Responder {
	HttpResponse::Ok().json(model.stats())
}

/// Main entry point for the server.
///
/// Trains the model once, then shares it read-only between workers.
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	let corpus = read_corpus(&args.corpus)?;
	let model = LanguageModel::new(&corpus, args.chain_length)?;
	info!(
		"trained on {} sentences from {} ({} distinct tokens, chain length {})",
		corpus.len(),
		args.corpus.display(),
		model.vocabulary_len(),
		model.chain_length()
	);
	let shared_model = web::Data::new(model);

	info!("listening on {}:{}", args.host, args.port);
	HttpServer::new(move || {
		App::new()
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_model)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await?;

	Ok(())
}
