pub mod recommend_portfolio;
