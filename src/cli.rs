//! Interactive demo subcommand: add/cancel orders and print the book,
//! one shell invocation at a time. Modeled on a scripted REPL rather
//! than a persistent session — each run starts from an empty book, so
//! it's most useful chained in a shell script for walking through a
//! scenario by hand.

use clap::{Subcommand, builder::PossibleValuesParser, value_parser};

use crate::engine::Engine;
use crate::sinks::StdoutSink;
use crate::types::{OrderId, OrderRequest, Price, Qty, Side};

#[derive(Subcommand)]
pub enum DemoCommand {
    /// Submit a limit order and print any resulting trades/ack.
    Add {
        #[arg(value_parser = PossibleValuesParser::new(["buy", "sell"]))]
        side: String,
        id: OrderId,
        price: Price,
        quantity: Qty,
    },
    /// Cancel a previously submitted order by id.
    Cancel {
        #[arg(value_parser = value_parser!(u64))]
        id: OrderId,
    },
    /// Run a short scripted scenario and print the book after each step.
    Scenario,
}

fn parse_side(side: &str) -> Side {
    match side {
        "buy" => Side::Buy,
        "sell" => Side::Sell,
        _ => unreachable!("clap restricts side to buy|sell"),
    }
}

fn print_book(engine: &Engine<StdoutSink>) {
    println!("------ Order Book ------");
    println!("Bids (highest first):");
    for (price, qty) in engine.depth(Side::Buy) {
        println!("  price={price} qty={qty}");
    }
    println!("Asks (lowest first):");
    for (price, qty) in engine.depth(Side::Sell) {
        println!("  price={price} qty={qty}");
    }
    println!("best_bid={:?} best_ask={:?}", engine.best_bid(), engine.best_ask());
    println!("-------------------------");
}

pub fn run_demo(command: DemoCommand) {
    let mut engine = Engine::new(16, StdoutSink);

    match command {
        DemoCommand::Add { side, id, price, quantity } => {
            engine.submit_limit_order(OrderRequest { id, side: parse_side(&side), price, qty: quantity });
        }
        DemoCommand::Cancel { id } => {
            engine.cancel_order(id);
        }
        DemoCommand::Scenario => {
            // The S1 scenario from the spec, walked step by step.
            engine.submit_limit_order(OrderRequest { id: 1, side: Side::Buy, price: 100, qty: 10 });
            engine.submit_limit_order(OrderRequest { id: 2, side: Side::Sell, price: 101, qty: 5 });
            engine.submit_limit_order(OrderRequest { id: 3, side: Side::Sell, price: 100, qty: 7 });
            engine.cancel_order(1);
        }
    }

    print_book(&engine);
}
