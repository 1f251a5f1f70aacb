//! TMDB catalog client library for flixterm.
//!
//! Provides an async client for the TMDB API v3: movie and TV listing
//! endpoints, keyword search, and image URL construction.

/// TMDB API client.
pub mod tmdb;
