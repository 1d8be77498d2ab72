//! Example: read tags from a file and print them.
use tagframe::ape::ApeItemValue;
use tagframe::config::ParseOptions;
use tagframe::probe::read_from_bytes;

fn main() {
	env_logger::init();

	let path = std::env::args().nth(1).expect("ERROR: No path specified!");
	let buffer = std::fs::read(&path).expect("ERROR: Failed to read file!");

	let tagged_buffer =
		read_from_bytes(&buffer, ParseOptions::new()).expect("ERROR: Failed to parse tags!");

	if tagged_buffer.is_empty() {
		println!("No tags found");
		return;
	}

	if let Some(id3v2) = &tagged_buffer.id3v2 {
		println!("--- ID3v{} ---", id3v2.header.version);
		for frame in &id3v2.frames {
			println!("{}: {}", frame.id(), frame.value);
		}
	}

	if let Some(ape) = &tagged_buffer.ape {
		let version = ape
			.footer
			.or(ape.header)
			.map(|record| record.version.to_string())
			.unwrap_or_default();

		println!("--- APE {} ---", version);
		for item in ape.items() {
			match &item.value {
				ApeItemValue::Text(text) | ApeItemValue::Locator(text) => {
					println!("{}: {}", item.key, text)
				},
				ApeItemValue::Binary(data) => println!("{}: {} bytes", item.key, data.len()),
			}
		}
	}

	if let Some(id3v1) = &tagged_buffer.id3v1 {
		println!("--- ID3v1 ---");
		println!("Title: {}", id3v1.title);
		println!("Artist: {}", id3v1.artist);
		println!("Album: {}", id3v1.album);
		println!("Year: {}", id3v1.year);
		println!("Comment: {}", id3v1.comment);
		println!("Track: {}", id3v1.track);
		println!("Genre: {}", id3v1.genre);
	}
}
