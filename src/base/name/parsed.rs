//! Parsing domain names from messages.
//!
//! This is a private module. It only adds the `parse` method to [`Name`].

use super::super::wire::{parse_octets, FormError, Parse, ParseError, Parser};
use super::dname::Name;
use std::vec::Vec;

impl Name {
    /// Parses a possibly compressed domain name from a message.
    ///
    /// The parser needs to be atop the complete message so that compression
    /// pointers can be followed. Every pointer has to point to an earlier
    /// position than the pointer itself. On success,
    /// the parser is positioned right after the name’s representation in
    /// place, i.e., after the first pointer if there is one.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let mut res = Vec::new();
        let mut walk = *parser;
        let mut end = None;

        // Pointers only point backwards but the labels in between can lead
        // back to the same pointer. Limit the hops to the message length.
        let mut hops = parser.octets_ref().len();

        loop {
            let label_pos = walk.pos();
            let head = u8::parse(&mut walk)?;
            match head & 0xC0 {
                0x00 if head == 0 => {
                    res.push(0);
                    break;
                }
                0x00 => {
                    let len = usize::from(head);
                    // Leave room for the root label.
                    if res.len() + len + 2 > Name::MAX_LEN {
                        return Err(ParseError::LongName);
                    }
                    res.push(head);
                    res.extend_from_slice(parse_octets(&mut walk, len)?);
                }
                0xC0 => {
                    let low = u8::parse(&mut walk)?;
                    let target =
                        usize::from(head & 0x3F) << 8 | usize::from(low);
                    if target >= label_pos || hops == 0 {
                        return Err(ParseError::BadCompressionPointer {
                            pos: label_pos,
                            target,
                        });
                    }
                    hops -= 1;
                    if end.is_none() {
                        end = Some(walk.pos());
                    }
                    walk.seek(target).map_err(|_| {
                        ParseError::short_input(target)
                    })?;
                }
                _ => {
                    return Err(FormError::new("invalid label type").into())
                }
            }
        }

        match end {
            Some(end) => {
                parser.seek(end).map_err(|_| ParseError::short_input(end))?
            }
            None => *parser = walk,
        }
        Ok(unsafe { Name::from_vec_unchecked(res) })
    }
}

//============ Testing =======================================================
