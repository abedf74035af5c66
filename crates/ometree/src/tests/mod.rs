mod references;
mod versions;
