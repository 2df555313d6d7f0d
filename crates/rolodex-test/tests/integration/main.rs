mod codec;
mod decode;
mod helpers;
mod matching;
mod score;
