//! Line-oriented front end.
//!
//! Reads one JSON [`Request`] per line and writes one JSON [`Response`] per
//! line. A line that cannot be understood gets an `ERROR` response and the
//! session carries on; bookings live as long as the session.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::booking::{BookingCollection, BookingDesk};
use crate::dto::{Request, Response};
use crate::ratebook::RateBook;

/// Carry out one request.
pub fn handle<R: RateBook, C: BookingCollection>(
    desk: &mut BookingDesk<R, C>,
    request: Request,
) -> Response {
    match request {
        Request::Quote(journey) => Response::Quote(desk.quote(&journey)),
        Request::Book(booking) => desk.create(&booking).into(),
        Request::List => Response::bookings(desk.list()),
        Request::Get { booking_id } => desk.get(booking_id).into(),
        Request::Cancel { booking_id } => desk.cancel(booking_id).into(),
        Request::Rebook {
            booking_id,
            booking,
        } => desk.rebook(booking_id, &booking).into(),
    }
}

/// Parse and carry out one input line.
pub fn handle_line<R: RateBook, C: BookingCollection>(
    desk: &mut BookingDesk<R, C>,
    line: &str,
) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            debug!(?request, "request");
            handle(desk, request)
        }
        Err(e) => {
            warn!(error = %e, "unreadable request");
            Response::error(e.to_string())
        }
    }
}

/// Serve requests from `input` until it ends, writing responses to `output`.
///
/// Blank lines are skipped. A line that is not UTF-8 gets an `ERROR`
/// response like any other unreadable line.
pub fn run<R, C, I, O>(desk: &mut BookingDesk<R, C>, mut input: I, mut output: O) -> io::Result<()>
where
    R: RateBook,
    C: BookingCollection,
    I: BufRead,
    O: Write,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle_line(desk, line),
            Err(e) => {
                warn!(error = %e, "request is not UTF-8");
                Response::error(e.to_string())
            }
        };
        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
    }
    Ok(())
}
